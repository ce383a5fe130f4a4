#![cfg(not(feature = "image"))]

use iris::imgproc::geometry::{Circle, CutParams};
use iris::imgproc::warp::CutOptions;
use iris::io::functional::has_decoder;
use iris::io::IoError;
use iris::{process_iris_cut, EngineError, IrisEngine};

#[test]
fn decoder_is_not_compiled_in() {
    assert!(!has_decoder());
}

#[test]
fn file_entry_points_report_unavailable() {
    let params = CutParams {
        iris: Circle::new(10.0, 10.0, 5.0),
        pupil: Circle::new(10.0, 10.0, 1.0),
    };
    let res = process_iris_cut("eye.png", &params, &CutOptions::default());
    assert!(matches!(res, Err(EngineError::Io(IoError::DecoderUnavailable))));

    let mut engine = IrisEngine::new();
    let res = engine.load_file("eye.png");
    assert!(matches!(res, Err(EngineError::Io(IoError::DecoderUnavailable))));
    assert!(!engine.is_loaded());
}
