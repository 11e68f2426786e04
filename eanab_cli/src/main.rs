use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use eanab_core::{check, pad_with_leading_zeros, try_detect_type, Barcode, BarcodeStandard, Module};
use eanab_encode::{AsciiRenderer, Bitmap, Encoder, Painter, RenderConfig};

#[derive(Parser)]
#[command(name = "eanab_cli")]
#[command(version)]
#[command(propagate_version = true)]
#[command(about = "Validate, encode and draw EAN/UPC barcodes from the command line", long_about = None)]
struct Cli {
    #[arg(short, long, global = true, help = "Print diagnostics to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct CodeArgs {
    #[arg(help = "Barcode digits")]
    code: String,
    #[arg(
        short,
        long,
        default_value = "auto",
        help = "Barcode standard: ean13, ean8, upca, upce or auto"
    )]
    standard: BarcodeStandard,
    #[arg(long, help = "Do not pad the code with leading zeros")]
    no_pad: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a code is a valid barcode.
    Check(CodeArgs),
    /// Detect the standard of a code.
    Detect {
        code: String,
        #[arg(long, help = "Do not pad the code with leading zeros")]
        no_pad: bool,
    },
    /// Pad a code with leading zeros to the length of its standard.
    Pad {
        code: String,
        #[arg(short, long, default_value = "auto")]
        standard: BarcodeStandard,
    },
    /// Print the bar patterns of a code, one group per guard or digit.
    Encode(CodeArgs),
    /// Draw a code as text.
    Render {
        #[command(flatten)]
        code: CodeArgs,
        #[arg(long, default_value_t = 1, help = "Width in pixels of a module")]
        scale: u16,
        #[arg(long, default_value_t = 40, help = "Height in pixels")]
        height: u32,
        #[arg(long, help = "Do not print the human-readable digits")]
        no_digits: bool,
        #[arg(long, help = "Swap dark and light characters")]
        invert: bool,
        #[arg(
            short,
            long,
            help = "Output file or stdout if unspecified",
            long_help = "Output file or stdout if unspecified. Only text output (.txt) is supported."
        )]
        output: Option<PathBuf>,
    },
}

fn check_output_path(path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let Some(path) = path else {
        return Ok(None);
    };
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") => Ok(Some(path)),
        Some(invalid) => Err(anyhow::Error::msg(format!(
            "invalid output extension '{}'",
            invalid
        ))),
        None => Err(anyhow::Error::msg("requested output has no extension")),
    }
}

fn run(cli: Cli) -> Result<bool> {
    let verbose = cli.verbose;
    match cli.command {
        Command::Check(args) => match check(args.code.as_str(), args.standard, !args.no_pad) {
            Ok(detected) => println!("valid ({})", detected),
            Err(e) => {
                println!("invalid: {}", e);
                return Ok(false);
            }
        },
        Command::Detect { code, no_pad } => match try_detect_type(code.as_str(), !no_pad) {
            Ok(standard) => println!("{}", standard),
            Err(e) => {
                if verbose {
                    eprintln!("{}", e);
                }
                println!("{}", BarcodeStandard::Unknown);
                return Ok(false);
            }
        },
        Command::Pad { code, standard } => {
            println!("{}", pad_with_leading_zeros(code.as_str(), standard)?);
        }
        Command::Encode(args) => {
            let symbol = Encoder::new()
                .with_standard(args.standard)
                .with_padding(!args.no_pad)
                .encode(args.code.as_str())?;
            if verbose {
                eprintln!("{} symbol of {} modules", symbol.standard(), symbol.module_count());
            }
            println!("{}", symbol);
        }
        Command::Render {
            code,
            scale,
            height,
            no_digits,
            invert,
            output,
        } => {
            // Before doing anything, make sure the requested output is valid.
            let output = check_output_path(output)?;
            let pad = !code.no_pad;
            let barcode = Barcode::resolve(code.code.as_str(), code.standard, pad)?;
            let config = RenderConfig::new()
                .with_scale(scale)
                .with_show_digits(!no_digits)
                .with_padding(pad);
            // Size the bitmap with a throwaway painter first, widths depend on the font.
            let width = Painter::new(Bitmap::filled(0, 0, Module::Space))
                .with_config(config.clone())
                .width_for(barcode.standard());
            if verbose {
                eprintln!("Drawing {} ({}x{} px)", barcode, width, height);
            }
            let mut painter = Painter::new(Bitmap::filled(width as usize, height as usize, Module::Space))
                .with_config(config);
            painter.try_draw(*barcode.digits(), 0, 0, height, barcode.standard())?;
            let bitmap = painter.into_canvas();
            let renderer = match invert {
                true => AsciiRenderer::new().inverted(),
                false => AsciiRenderer::new(),
            };
            match output {
                Some(path) => {
                    let f = File::create(path)?;
                    let mut writer = BufWriter::new(f);
                    renderer.render(&mut writer, &bitmap)?;
                    writer.flush()?;
                }
                None => {
                    let stdout = std::io::stdout();
                    renderer.render(&mut stdout.lock(), &bitmap)?;
                }
            }
        }
    }
    Ok(true)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    match run(cli)? {
        true => Ok(ExitCode::SUCCESS),
        false => Ok(ExitCode::FAILURE),
    }
}
