use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::process;

use bc5::{Bc5, BlueMode, Color32, Image};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  bc5 compress <input.png> <output.bc5>");
    eprintln!("  bc5 decompress <input.bc5> <output.png> [blue]");
    eprintln!();
    eprintln!("Blue options: zero (default), one, normal, red");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 || args.len() > 5 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];
    let input_path = &args[2];
    let output_path = &args[3];

    let result = match command.as_str() {
        "compress" if args.len() == 4 => compress(input_path, output_path),
        "decompress" => {
            let blue_mode = match args.get(4).map(String::as_str) {
                None | Some("zero") => BlueMode::AlwaysZero,
                Some("one") => BlueMode::AlwaysOne,
                Some("normal") => BlueMode::ComputeNormalZ,
                Some("red") => BlueMode::CopyRed,
                Some(other) => {
                    eprintln!("Invalid blue mode: {}", other);
                    print_usage();
                    process::exit(1);
                }
            };
            decompress(input_path, output_path, blue_mode)
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn compress(input: &str, output: &str) -> Result<()> {
    let image = load_png(input)?;
    let bc5 = Bc5::from_rgba(&image)?;
    bc5.write_file(output)?;
    println!(
        "Compressed {}x{} image into {} blocks",
        bc5.width(),
        bc5.height(),
        bc5.data().len() / bc5::BC5_BLOCK_SIZE
    );
    Ok(())
}

fn decompress(input: &str, output: &str, blue_mode: BlueMode) -> Result<()> {
    let bc5 = Bc5::read_file(input)?.with_blue_mode(blue_mode);
    let image = bc5.decompress()?;
    save_png(output, image)?;
    println!("Decompressed {}x{} image", bc5.width(), bc5.height());
    Ok(())
}

fn load_png<P: AsRef<Path>>(path: P) -> Result<Image<Color32>> {
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let buf = &buf[..info.buffer_size()];

    let data: Vec<Color32> = match info.color_type {
        png::ColorType::Rgba => buf
            .chunks_exact(4)
            .map(|c| Color32::new(c[0], c[1], c[2], c[3]))
            .collect(),
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .map(|c| Color32::new(c[0], c[1], c[2], 255))
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .map(|c| Color32::new(c[0], c[0], c[0], c[1]))
            .collect(),
        png::ColorType::Grayscale => buf
            .iter()
            .map(|&v| Color32::new(v, v, v, 255))
            .collect(),
        other => return Err(format!("unsupported PNG color type {:?}", other).into()),
    };

    Ok(Image {
        w: info.width,
        h: info.height,
        data,
    })
}

fn save_png<P: AsRef<Path>>(path: P, image: Image<Color32>) -> Result<()> {
    let file = File::create(path)?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, image.w, image.h);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;

    let rgba = image.into_rgba_bytes();
    writer.write_image_data(&rgba.data)?;
    Ok(())
}
