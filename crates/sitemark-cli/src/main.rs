use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use sitemark_site::{Generator, copy_static};

fn main() {
    let mut content_dir = PathBuf::from("content");
    let mut template_path = PathBuf::from("template.html");
    let mut static_dir = PathBuf::from("static");
    let mut output_dir = PathBuf::from("public");
    let mut sanitized = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--sanitized" => sanitized = true,
            "--content" => content_dir = expect_value(&mut args, "--content"),
            "--template" => template_path = expect_value(&mut args, "--template"),
            "--static" => static_dir = expect_value(&mut args, "--static"),
            "--out" => output_dir = expect_value(&mut args, "--out"),
            _ => {
                eprintln!("unexpected argument: {}", arg);
                print_usage();
                process::exit(2);
            }
        }
    }

    let template = fs::read_to_string(&template_path).unwrap_or_else(|err| {
        eprintln!("failed to read {}: {}", template_path.display(), err);
        process::exit(1);
    });

    if static_dir.is_dir() {
        copy_static(&static_dir, &output_dir).unwrap_or_else(|err| {
            eprintln!(
                "failed to copy {} to {}: {}",
                static_dir.display(),
                output_dir.display(),
                err
            );
            process::exit(1);
        });
    }

    let generator = Generator::new(template).sanitized(sanitized);
    generator
        .generate_pages(&content_dir, &output_dir)
        .unwrap_or_else(|err| {
            eprintln!("failed to generate pages: {}", err);
            process::exit(1);
        });
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> PathBuf {
    match args.next() {
        Some(value) => PathBuf::from(value),
        None => {
            eprintln!("{} expects a path", flag);
            print_usage();
            process::exit(2);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Usage: sitemark-cli [--content DIR] [--template FILE] [--static DIR] [--out DIR] [--sanitized]"
    );
}
