use argh::FromArgs;
use std::{path::PathBuf, str::FromStr};

use greyfilt::{
    image::{Image, ImageError},
    imgproc::filter,
    io,
};

/// The filters that can be applied from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterKind {
    Identity,
    Invert,
    Blur,
    Sharpen,
    Edges,
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "identity" => Ok(FilterKind::Identity),
            "invert" => Ok(FilterKind::Invert),
            "blur" | "box" => Ok(FilterKind::Blur),
            "sharpen" => Ok(FilterKind::Sharpen),
            "edges" | "sobel" => Ok(FilterKind::Edges),
            _ => Err(format!("Invalid filter: {s}")),
        }
    }
}

#[derive(FromArgs)]
/// Apply a greyscale filter to an image and save the result as png
struct Args {
    /// the filter to apply: identity, invert, blur, sharpen or edges
    #[argh(option)]
    filter: FilterKind,

    /// the box kernel size used by blur and sharpen
    #[argh(option, default = "3")]
    kernel_size: usize,

    /// path to the input image
    #[argh(option)]
    input: PathBuf,

    /// path where the greyscale png is written
    #[argh(option)]
    output: PathBuf,
}

fn apply_filter(
    image: &Image<u8>,
    kind: FilterKind,
    kernel_size: usize,
) -> Result<Image<u8>, ImageError> {
    match kind {
        FilterKind::Identity => Ok(image.clone()),
        FilterKind::Invert => filter::invert(image),
        FilterKind::Blur => filter::box_blur(image, kernel_size),
        FilterKind::Sharpen => filter::sharpen(image, kernel_size),
        FilterKind::Edges => filter::sobel_edges(image),
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let image = io::read_image_any_gray8(&args.input)?;
    log::info!(
        "read {} ({}x{})",
        args.input.display(),
        image.width(),
        image.height()
    );

    let filtered = apply_filter(&image, args.filter, args.kernel_size)?;
    log::info!(
        "applied {:?} with kernel size {}",
        args.filter,
        args.kernel_size
    );

    io::write_image_png_gray8(&args.output, &filtered)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();
    run(&args)
}
