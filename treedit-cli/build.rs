//! Build script for treedit-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("treedit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Edit directory trees as plain text")
        .long_about(
            "Render a directory snapshot as an indented tree, then reconcile the edited text \
             back into a tree that records which entries were renamed or moved",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file applied on top of user and project configuration")
                .value_name("PATH")
                .global(true)
                .env("TREEDIT_CONFIG"),
        )
        .subcommands(vec![
            Command::new("format")
                .about("Render a snapshot as tree text")
                .long_about("Print the connector-glyph rendering of a snapshot JSON file"),
            Command::new("check-root")
                .about("Check whether the root line of edited text was changed")
                .long_about("Report a changed root line, or print the text with it restored"),
            Command::new("parse")
                .about("Parse edited text against a snapshot")
                .long_about("Print the parsed tree as JSON, with old and new paths on moved nodes"),
            Command::new("analyze")
                .about("Report duplicate files and folder merges in a tree")
                .long_about("Check a parsed tree for conflicts that block or need confirmation"),
            Command::new("reconcile")
                .about("Parse, check and produce the hand-off document")
                .long_about(
                    "Run the full flow and print the original and modified trees for an executor",
                ),
            Command::new("verify")
                .about("Check that a text parses back into the snapshot's shape")
                .long_about("Round-trip a snapshot, or a given text, through the parser"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a treedit configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("treedit.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
