mod config;
mod verify;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use iconset::SourceImage;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "xcprep", version, about = "Xcode project maintenance utilities")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Alternate config file (default: xcprep.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite build settings inside the targeted pbxproj blocks
    FixProject(FixProjectArgs),

    /// Generate the app icon set and its Contents.json
    Icons(IconsArgs),

    /// Check an existing .appiconset against its manifest
    Verify(VerifyArgs),
}

#[derive(clap::Args)]
struct FixProjectArgs {
    /// project.pbxproj to patch (falls back to [patch].project-file)
    file: Option<PathBuf>,

    /// Report what would change without writing (exit 1 if changes pending)
    #[arg(long)]
    check: bool,

    /// Target block identifier (24 hex chars). Repeatable; overrides config.
    #[arg(long = "id", value_name = "HEX")]
    ids: Vec<String>,
}

#[derive(clap::Args)]
struct IconsArgs {
    /// Xcode project directory containing Assets.xcassets
    project_dir: Option<PathBuf>,

    /// Square source image (falls back to [icons].source, then placeholder)
    #[arg(short, long, value_name = "PNG")]
    source: Option<PathBuf>,

    /// Where to persist the placeholder when no source exists
    #[arg(long, value_name = "PNG")]
    reference_out: Option<PathBuf>,
}

#[derive(clap::Args)]
struct VerifyArgs {
    /// .appiconset directory to check
    dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    match cli.command {
        Command::FixProject(args) => do_fix_project(args, &config, cli.no_color),
        Command::Icons(args) => do_icons(args, &config),
        Command::Verify(args) => {
            process::exit(verify::verify_iconset(&args.dir, cli.no_color));
        }
    }
}

fn do_fix_project(args: FixProjectArgs, config: &Config, no_color: bool) {
    let path = match args.file.or_else(|| config.patch.project_file.clone()) {
        Some(p) => p,
        None => {
            eprintln!("error: no project file given (pass a path or set [patch].project-file)");
            process::exit(1);
        }
    };

    let spec = match config.patch.to_spec(&args.ids) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if args.check {
        let source = match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path.display(), e);
                process::exit(1);
            }
        };

        let patched = pbxpatch::apply(&source, &spec);

        // Set up codespan file database for span display
        let mut files = SimpleFiles::new();
        let file_id = files.add(path.display().to_string(), source);

        let color_choice = if no_color {
            ColorChoice::Never
        } else {
            ColorChoice::Auto
        };
        let writer = StandardStream::stderr(color_choice);
        let term_config = term::Config::default();
        for edit in &patched.edits {
            let diagnostic = edit.to_diagnostic(file_id);
            let _ =
                term::emit_to_write_style(&mut writer.lock(), &term_config, &files, &diagnostic);
        }

        if patched.changed() {
            eprintln!(
                "{} line(s) would change in '{}'",
                patched.edits.len(),
                path.display()
            );
            process::exit(1);
        }
        eprintln!("ok: '{}' is already patched", path.display());
        return;
    }

    match pbxpatch::patch_file(&path, &spec) {
        Ok(report) => {
            if report.edits.is_empty() {
                eprintln!("ok: nothing to patch in '{}'", path.display());
            } else {
                for edit in &report.edits {
                    eprintln!("  line {}: block {}", edit.line_number, edit.block);
                }
                eprintln!(
                    "patched {} line(s) in '{}'",
                    report.edits.len(),
                    path.display()
                );
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn do_icons(args: IconsArgs, config: &Config) {
    let project_dir = match args.project_dir.or_else(|| config.icons.project_dir.clone()) {
        Some(p) => p,
        None => {
            eprintln!(
                "error: no project directory given (pass a path or set [icons].project-dir)"
            );
            process::exit(1);
        }
    };

    let source_path = args.source.or_else(|| config.icons.source.clone());
    let reference_out = args
        .reference_out
        .or_else(|| config.icons.reference_out.clone());

    match source_path.as_deref() {
        Some(path) if path.exists() => {
            eprintln!("loading source image from '{}'", path.display());
        }
        Some(path) => {
            eprintln!(
                "source image '{}' not found, generating placeholder",
                path.display()
            );
        }
        None => eprintln!("no source image configured, generating placeholder"),
    }

    let source =
        match SourceImage::load_or_placeholder(source_path.as_deref(), reference_out.as_deref()) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        };

    let out_dir = iconset::appiconset_dir(&project_dir);
    match iconset::generate(&source, &out_dir) {
        Ok(report) => {
            for icon in &report.written {
                eprintln!("  {} -> {}", icon.size, icon.path.display());
            }
            eprintln!(
                "wrote {} icons and '{}'",
                report.written.len(),
                report.manifest_path.display()
            );
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
