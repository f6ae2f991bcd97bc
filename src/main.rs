//! Mwbook: MediaWiki Book Builder CLI
//!
//! A command-line tool that builds publishable documents (PDF by
//! default) from MediaWiki sources by driving Pandoc twice: once to
//! normalize the source to Markdown, once to render the final output.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use console::style;

use mwbook::cli::{confirm_open, open_viewer, Cli};
use mwbook::pipeline::{
    prepend_header, render, render_args, sanitize_to_workspace, to_intermediate, BuildConfig,
    HeaderOutcome, Workspace, PANDOC_BIN,
};
use mwbook::utils::{
    clear_spinner, create_spinner, done, explain, fail, phase, print_banner, print_config, warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = BuildConfig::from_cli(&cli)?;

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(
        &config.input,
        &config.output_path,
        config.doc_type.as_str(),
        &config.lang,
        &config.from_format,
        &config.to_format,
    );

    // Stage the workspace. Temp directory creation is fatal; copying
    // images is best-effort.
    phase("Creating temp directory and copying images");
    let workspace = match Workspace::create() {
        Ok(ws) => ws,
        Err(err) => {
            fail();
            return Err(err);
        }
    };
    match workspace.stage_images(&config.images_dir) {
        Ok(_) => done(),
        Err(_) => {
            warning();
            explain("Failed to copy images. Are you sure you have some?");
            explain("Continuing with an empty temp directory");
        }
    }

    // Strip wiki-only markers into a workspace copy; the source file
    // is left untouched.
    phase("Removing wiki-only markup");
    let sanitized = match sanitize_to_workspace(&config.input, workspace.path()) {
        Ok(path) => {
            done();
            path
        }
        Err(err) => {
            fail();
            return Err(err);
        }
    };

    // First Pandoc pass: source format to intermediate Markdown.
    phase("Converting to Markdown for pre-processing");
    let intermediate = match to_intermediate(&config, &sanitized, workspace.path()) {
        Ok(path) => {
            done();
            path
        }
        Err(err) => {
            fail();
            let kept = workspace.persist();
            explain(&format!(
                "Something went wrong. We're keeping your temp files at {}",
                kept.display()
            ));
            return Err(err.into());
        }
    };

    // Prepend the localized metadata header, if a template exists.
    phase("Adding metadata header");
    match prepend_header(&intermediate, &config, Local::now().date_naive()) {
        Ok(HeaderOutcome::Applied) => done(),
        Ok(HeaderOutcome::MissingTemplate) => {
            warning();
            explain(&format!(
                "We couldn't find header.yaml in {}",
                config.resources_dir.display()
            ));
            explain("A nice cover and title/author info may be missing from your output");
        }
        Err(err) => {
            fail();
            let kept = workspace.persist();
            explain(&format!("Keeping your temp files at {}", kept.display()));
            return Err(err);
        }
    }

    if config.debug {
        print_debug_info(&config, &intermediate, workspace.path());
    }

    // Second Pandoc pass: render to the target format. The workspace
    // rides along so staged images resolve.
    let spinner = create_spinner(&format!(
        "Converting to {} (this may take a while)...",
        config.to_format
    ));
    let rendered = render(&config, &intermediate, workspace.path());
    clear_spinner(&spinner);
    phase(&format!("Converting to {}", config.to_format));
    if let Err(err) = rendered {
        fail();
        let kept = workspace.persist();
        explain(&format!(
            "Something went wrong. We're keeping your temp files at {}",
            kept.display()
        ));
        return Err(err.into());
    }
    done();

    // Cleanup: delete the workspace, unless debug asked to keep it.
    // A failed deletion is reported, not silently ignored.
    if config.debug {
        let kept = workspace.persist();
        phase(&format!("Leaving temp files at {}", kept.display()));
        done();
    } else {
        phase("Cleaning up temp directory");
        match workspace.close() {
            Ok(()) => done(),
            Err(err) => {
                fail();
                return Err(err).context("Failed to remove the temporary workspace");
            }
        }
    }

    println!(
        "\nYour {} file has been created at {}",
        config.to_format,
        style(config.output_path.display()).green().bold()
    );

    if !config.no_open && confirm_open(&config.output_path) {
        if let Err(err) = open_viewer(&config.output_path) {
            explain(&format!("Could not open a viewer: {}", err));
        }
    }

    Ok(())
}

/// Print the diagnostics block requested by --debug.
fn print_debug_info(config: &BuildConfig, intermediate: &std::path::Path, workspace: &std::path::Path) {
    println!("\n-- DEBUG INFORMATION ------------------------------------------\n");
    println!("* Working directory:  {}", config.build_dir.display());
    println!("* Input file:         {}", config.input.display());
    println!("* Intermediate file:  {}", intermediate.display());
    println!(
        "* YAML header:        {}",
        config.header_template_path().display()
    );
    println!("* Output file:        {}", config.output_path.display());
    println!("* Language:           {}", config.lang);
    println!("* Book or article:    {}", config.doc_type.as_str());
    println!(
        "* Pandoc command:     {} {}",
        PANDOC_BIN,
        render_args(config, intermediate, workspace).join(" ")
    );
    println!("\n---------------------------------------------------------------");
}
