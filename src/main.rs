use anyhow::{bail, Context, Result};
use artifactio::cli::commands::{
    ConfigFormat, ConvertCommand, DecodeCommand, EncodeCommand, LoadJsonCommand, MkdirsCommand,
    ReadConfigCommand, SizeCommand,
};
use artifactio::cli::output::*;
use artifactio::cli::{Cli, Command};
use artifactio::{ArtifactIo, ConfigMapping};
use std::io::Read;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let io = ArtifactIo::default();

    let result = match &cli.command {
        Command::ReadConfig(cmd) => read_config(&io, cmd),
        Command::LoadJson(cmd) => load_json(&io, cmd),
        Command::Convert(cmd) => convert(&io, cmd),
        Command::Mkdirs(cmd) => mkdirs(&io, cmd),
        Command::Size(cmd) => size(&io, cmd),
        Command::Encode(cmd) => encode(&io, cmd),
        Command::Decode(cmd) => decode(&io, cmd),
    };

    if let Err(e) = result {
        eprintln!("{} {}", CROSS, style(format!("{:#}", e)).red());
        std::process::exit(1);
    }

    Ok(())
}

fn read_config(io: &ArtifactIo, cmd: &ReadConfigCommand) -> Result<()> {
    let config = io.read_config(&cmd.file)?;

    if let Some(key) = &cmd.key {
        println!("{}", format_value(config.require_path(key)?));
        return Ok(());
    }

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{} {}", INFO, style(&cmd.file).bold());
        println!("{}", format_mapping_summary(&config));
    }
    Ok(())
}

fn load_json(io: &ArtifactIo, cmd: &LoadJsonCommand) -> Result<()> {
    let data = io.load_json(&cmd.file)?;

    match &cmd.key {
        Some(key) => println!("{}", format_value(data.require_path(key)?)),
        None => println!("{}", serde_json::to_string_pretty(&data)?),
    }
    Ok(())
}

fn convert(io: &ArtifactIo, cmd: &ConvertCommand) -> Result<()> {
    let data: ConfigMapping = match ConfigFormat::from_path(&cmd.input) {
        Some(ConfigFormat::Json) => io.load_json(&cmd.input)?,
        Some(ConfigFormat::Yaml) => io.read_config(&cmd.input)?,
        None => bail!("Cannot tell the format of '{}' from its extension", cmd.input),
    };

    match ConfigFormat::from_path(&cmd.output) {
        Some(ConfigFormat::Json) => io.save_json(&data, &cmd.output)?,
        Some(ConfigFormat::Yaml) => io.save_yaml(&data, &cmd.output)?,
        None => bail!("Cannot tell the format of '{}' from its extension", cmd.output),
    }

    println!(
        "{} {} → {} ({} keys)",
        CHECK,
        style(&cmd.input).dim(),
        style(&cmd.output).bold(),
        style(data.len()).cyan()
    );
    Ok(())
}

fn mkdirs(io: &ArtifactIo, cmd: &MkdirsCommand) -> Result<()> {
    let created = io.create_directories(&cmd.paths, !cmd.quiet)?;
    println!("{}", format_created(&created, cmd.paths.len()));
    Ok(())
}

fn size(io: &ArtifactIo, cmd: &SizeCommand) -> Result<()> {
    println!("{}", io.get_file_size(&cmd.file)?);
    Ok(())
}

fn encode(io: &ArtifactIo, cmd: &EncodeCommand) -> Result<()> {
    let encoded = io.encode_image(&cmd.file)?;

    match &cmd.output {
        Some(output) => {
            std::fs::write(output, &encoded)
                .with_context(|| format!("Failed to write {}", output))?;
            println!(
                "{} {} → {} ({} chars)",
                CHECK,
                style(&cmd.file).dim(),
                style(output).bold(),
                encoded.len()
            );
        }
        None => println!("{}", encoded),
    }
    Ok(())
}

fn decode(io: &ArtifactIo, cmd: &DecodeCommand) -> Result<()> {
    let text = if cmd.input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read base64 text from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&cmd.input)
            .with_context(|| format!("Failed to read {}", cmd.input))?
    };

    io.decode_image(&text, &cmd.output)?;
    println!(
        "{} Wrote {} ({})",
        CHECK,
        style(&cmd.output).bold(),
        io.get_file_size(&cmd.output)?
    );
    Ok(())
}
