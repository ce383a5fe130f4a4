#![cfg(feature = "image")]

use iris::image::{Image, ImageSize};
use iris::imgproc::geometry::{Circle, CutParams, ViewParams};
use iris::imgproc::warp::{iris_cut, CutOptions};
use iris::io::functional::write_image_png_rgba8;
use iris::io::IoError;
use iris::{process_iris_cut, process_iris_cut_from_view, EngineError, IrisEngine};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn gradient(width: usize, height: usize) -> Result<Image<u8, 4>, EngineError> {
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[(x * 2) as u8, (y * 2) as u8, 128, 255]);
        }
    }
    Ok(Image::new(ImageSize { width, height }, data)?)
}

#[test]
fn process_file_matches_in_memory_cut() -> TestResult {
    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("eye.png");

    let src = gradient(120, 100)?;
    write_image_png_rgba8(&file_path, &src)?;

    let params = CutParams {
        iris: Circle::new(60.0, 50.0, 35.0),
        pupil: Circle::new(61.0, 49.0, 12.0),
    };
    let options = CutOptions::default();

    let from_file = process_iris_cut(&file_path, &params, &options)?;
    assert_eq!(from_file, iris_cut(&src, &params, &options)?);
    assert_eq!(from_file.size(), ImageSize { width: 70, height: 70 });

    Ok(())
}

#[test]
fn process_file_from_view() -> TestResult {
    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("eye.png");
    write_image_png_rgba8(&file_path, &gradient(100, 100)?)?;

    // a 100x100 image shown in a 50x50 box is scaled by 0.5
    let view = ViewParams {
        view_width: 50.0,
        view_height: 50.0,
        outer_radius: 0.8,
        inner_radius: 0.2,
        ..Default::default()
    };
    let cut = process_iris_cut_from_view(&file_path, &view, &CutOptions::default())?;
    assert_eq!(cut.size(), ImageSize { width: 80, height: 80 });

    Ok(())
}

#[test]
fn process_missing_file() {
    let params = CutParams {
        iris: Circle::new(10.0, 10.0, 5.0),
        pupil: Circle::new(10.0, 10.0, 1.0),
    };
    let res = process_iris_cut("does/not/exist.png", &params, &CutOptions::default());
    assert!(matches!(
        res,
        Err(EngineError::Io(IoError::FileDoesNotExist(_)))
    ));
}

#[test]
fn engine_loads_file() -> TestResult {
    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("eye.png");
    let src = gradient(16, 8)?;
    write_image_png_rgba8(&file_path, &src)?;

    let mut engine = IrisEngine::new();
    engine.load_file(&file_path)?;
    assert_eq!(engine.rgba()?, &src);

    Ok(())
}
