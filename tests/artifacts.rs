//! Binary artifacts, image payloads and directory layout

mod helpers;

use artifactio::{encode_bytes, ErrorKind};
use helpers::*;
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TrainedModel {
    architecture: String,
    input_shape: (u32, u32, u32),
    layers: Vec<Layer>,
    class_names: HashMap<u32, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Layer {
    Dense { units: u32, weights: Vec<f64> },
    Dropout(f64),
    Flatten,
}

fn model() -> TrainedModel {
    TrainedModel {
        architecture: "vgg16".to_string(),
        input_shape: (224, 224, 3),
        layers: vec![
            Layer::Flatten,
            Layer::Dense {
                units: 2,
                weights: vec![0.25, -0.75, 1e-9, f64::MAX],
            },
            Layer::Dropout(0.5),
        ],
        class_names: HashMap::from([(0, "normal".to_string()), (1, "adenocarcinoma".to_string())]),
    }
}

#[test]
fn test_model_artifact_round_trip() {
    let ws = Workspace::new();
    let path = ws.path("model.bin");

    ws.io.save_binary(&model(), &path).unwrap();
    let loaded: TrainedModel = ws.io.load_binary(&path).unwrap();
    assert_eq!(loaded, model());
}

#[test]
fn test_loading_as_wrong_type_fails() {
    let ws = Workspace::new();
    let path = ws.path("model.bin");
    ws.io.save_binary(&model(), &path).unwrap();

    let err = ws.io.load_binary::<Vec<Layer>, _>(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Deserialization);
}

#[test]
fn test_plain_file_is_not_an_artifact() {
    let ws = Workspace::new();
    let path = ws.write("notes.txt", "just some text");

    let err = ws.io.load_binary::<String, _>(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Deserialization);
}

#[test]
fn test_create_directories_twice() {
    let ws = Workspace::new();
    let dirs = [ws.path("artifacts/data_ingestion"), ws.path("artifacts/training")];

    let first = ws.io.create_directories(&dirs, true).unwrap();
    let logged = ws.log.len();
    let second = ws.io.create_directories(&dirs, true).unwrap();

    assert_eq!(first.len(), 2);
    assert!(second.is_empty());
    assert_eq!(logged, 2);
    assert_eq!(ws.log.len(), logged);
}

#[test]
fn test_file_size_of_2048_bytes() {
    let ws = Workspace::new();
    let path = ws.write("weights.bin", [7u8; 2048]);
    assert_eq!(ws.io.get_file_size(&path).unwrap(), "2.00 KB");
}

#[test]
fn test_decode_rejects_garbage() {
    let ws = Workspace::new();
    let err = ws.io.decode_image("!!!", ws.path("out.jpg")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_encode_then_decode_image_file() {
    let ws = Workspace::new();
    let original: Vec<u8> = (0..=255u8).cycle().take(3000).collect();
    let source = ws.write("scan.jpg", &original);

    let encoded = ws.io.encode_image(&source).unwrap();
    let target = ws.path("inputImage.jpg");
    ws.io.decode_image(&encoded, &target).unwrap();

    assert_eq!(file_bytes(&target), original);
}

proptest! {
    #[test]
    fn prop_base64_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let ws = Workspace::new();
        let path = ws.path("img.bin");

        ws.io.decode_image(&encode_bytes(&bytes), &path).unwrap();
        prop_assert_eq!(file_bytes(&path), bytes);
    }

    #[test]
    fn prop_binary_round_trip(
        name in ".{0,32}",
        values in proptest::collection::vec(any::<i64>(), 0..64),
        flag in any::<Option<bool>>(),
    ) {
        let ws = Workspace::new();
        let path = ws.path("obj.bin");
        let data = (name, values, flag);

        ws.io.save_binary(&data, &path).unwrap();
        let loaded: (String, Vec<i64>, Option<bool>) = ws.io.load_binary(&path).unwrap();
        prop_assert_eq!(loaded, data);
    }
}
