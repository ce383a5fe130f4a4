use argh::FromArgs;
use std::path::PathBuf;
use std::time::Instant;

use iris::{
    imgproc::{
        geometry::{Circle, CutParams, ViewParams},
        parallel::ExecutionStrategy,
        warp::CutOptions,
    },
    io::functional as F,
};

#[derive(FromArgs)]
/// Cut the iris out of an eye photograph and save it as a transparent png
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the output png
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// json file with the cut options, e.g. {"fit":"Cover","strategy":"Serial"}
    #[argh(option)]
    options: Option<PathBuf>,

    /// run on the calling thread only
    #[argh(switch)]
    serial: bool,

    #[argh(subcommand)]
    mode: Mode,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Mode {
    Pixel(PixelArgs),
    View(ViewArgs),
}

#[derive(FromArgs)]
/// circles in image pixels
#[argh(subcommand, name = "pixel")]
struct PixelArgs {
    /// iris center x
    #[argh(option)]
    iris_x: f64,

    /// iris center y
    #[argh(option)]
    iris_y: f64,

    /// iris radius
    #[argh(option)]
    iris_radius: f64,

    /// pupil radius
    #[argh(option)]
    pupil_radius: f64,

    /// pupil center x, defaults to the iris center
    #[argh(option)]
    pupil_x: Option<f64>,

    /// pupil center y, defaults to the iris center
    #[argh(option)]
    pupil_y: Option<f64>,
}

#[derive(FromArgs)]
/// circles relative to the layout the image was shown in
#[argh(subcommand, name = "view")]
struct ViewArgs {
    /// layout width
    #[argh(option)]
    view_width: f64,

    /// layout height
    #[argh(option)]
    view_height: f64,

    /// iris radius as a fraction of the shorter layout side
    #[argh(option)]
    outer_radius: f64,

    /// pupil radius as a fraction of the shorter layout side
    #[argh(option)]
    inner_radius: f64,

    /// iris center offset from the layout center, fraction of the width
    #[argh(option, default = "0.0")]
    outer_dx: f64,

    /// iris center offset from the layout center, fraction of the height
    #[argh(option, default = "0.0")]
    outer_dy: f64,

    /// pupil center offset from the layout center, defaults to the iris offset
    #[argh(option)]
    inner_dx: Option<f64>,

    /// pupil center offset from the layout center, defaults to the iris offset
    #[argh(option)]
    inner_dy: Option<f64>,
}

impl ViewArgs {
    fn view_params(&self) -> ViewParams {
        ViewParams {
            view_width: self.view_width,
            view_height: self.view_height,
            outer_radius: self.outer_radius,
            inner_radius: self.inner_radius,
            outer_dx: self.outer_dx,
            outer_dy: self.outer_dy,
            inner_dx: self.inner_dx.unwrap_or(self.outer_dx),
            inner_dy: self.inner_dy.unwrap_or(self.outer_dy),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut options: CutOptions = match &args.options {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => CutOptions::default(),
    };
    if args.serial {
        options.strategy = ExecutionStrategy::Serial;
    }
    log::debug!("cut options: {options:?}");

    let start = Instant::now();
    let cut = match args.mode {
        Mode::Pixel(p) => {
            let params = CutParams {
                iris: Circle::new(p.iris_x, p.iris_y, p.iris_radius),
                pupil: Circle::new(
                    p.pupil_x.unwrap_or(p.iris_x),
                    p.pupil_y.unwrap_or(p.iris_y),
                    p.pupil_radius,
                ),
            };
            iris::process_iris_cut(&args.image_path, &params, &options)?
        }
        Mode::View(v) => {
            let view = v.view_params();
            iris::process_iris_cut_from_view(&args.image_path, &view, &options)?
        }
    };
    log::info!("iris cut {} in {:?}", cut.size(), start.elapsed());

    F::write_image_png_rgba8(&args.output_path, &cut)?;
    println!("saved {}", args.output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_args(extra: &[&str]) -> Result<ViewArgs, argh::EarlyExit> {
        let mut args = vec![
            "--view-width",
            "200",
            "--view-height",
            "100",
            "--outer-radius",
            "0.4",
            "--inner-radius",
            "0.1",
            "--outer-dx",
            "0.05",
            "--outer-dy",
            "0.02",
        ];
        args.extend_from_slice(extra);
        ViewArgs::from_args(&["view"], &args)
    }

    #[test]
    fn inner_offsets_default_to_outer() -> Result<(), argh::EarlyExit> {
        let view = view_args(&[])?.view_params();
        assert_eq!(view.inner_dx, 0.05);
        assert_eq!(view.inner_dy, 0.02);
        Ok(())
    }

    #[test]
    fn inner_offsets_are_independent() -> Result<(), argh::EarlyExit> {
        let view = view_args(&["--inner-dx", "0.01", "--inner-dy", "0.03"])?.view_params();
        assert_eq!(view.outer_dx, 0.05);
        assert_eq!(view.outer_dy, 0.02);
        assert_eq!(view.inner_dx, 0.01);
        assert_eq!(view.inner_dy, 0.03);
        Ok(())
    }
}
