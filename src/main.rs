mod functions;
mod localization;
mod read;
mod statics;
mod types;
mod write;

use crate::{functions::read_source, localization::*, read::*, types::TextUnit, write::*};
use clap::{crate_version, value_parser, Arg, ArgAction, Command};
use color_print::cformat;
use rayon::prelude::*;
use std::{
    fs::File,
    path::{Path, PathBuf},
    process::exit,
    time::Instant,
};
use sys_locale::get_locale;
use walkdir::WalkDir;

fn preparse_args() -> Language {
    let preparse = Command::new("preparse")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .ignore_errors(true)
        .arg(
            Arg::new("language")
                .short('l')
                .long("language")
                .value_parser(["ru", "en"]),
        );
    let mut preparse_matches = preparse.get_matches();
    let language_arg = preparse_matches.remove_one::<String>("language");

    let language = language_arg.unwrap_or_else(|| {
        let locale = get_locale().unwrap_or(String::from("en-US"));

        if let Some((lang, _)) = locale.split_once('-') {
            lang.to_owned()
        } else {
            locale
        }
    });

    match language.as_str() {
        "ru" | "be" | "uk" => Language::Russian,
        _ => Language::English,
    }
}

fn setup_cli(localization: &Localization<'static>) -> Command {
    let input_dir_arg = Arg::new("input-dir")
        .short('i')
        .long("input-dir")
        .help(cformat!(
            "{}\n<bold>[{} game]</>",
            localization.input_dir_arg_desc,
            localization.default_value
        ))
        .value_name(localization.input_path_arg_type)
        .value_parser(value_parser!(PathBuf))
        .default_value("game")
        .hide_default_value(true)
        .display_order(1);

    let output_file_arg = Arg::new("output-file")
        .short('o')
        .long("output-file")
        .help(cformat!(
            "{}\n<bold>[{} translations.rpt]</>",
            localization.output_file_arg_desc,
            localization.default_value
        ))
        .value_name(localization.output_path_arg_type)
        .value_parser(value_parser!(PathBuf))
        .default_value("translations.rpt")
        .hide_default_value(true)
        .display_order(2);

    let fill_flag = Arg::new("fill-template")
        .short('f')
        .long("fill-template")
        .action(ArgAction::SetTrue)
        .help(localization.fill_flag_desc)
        .display_order(3);

    let language_arg = Arg::new("language")
        .short('l')
        .long("language")
        .value_name(localization.language_arg_type)
        .help(cformat!(
            "{}\n<bold>[{} en, ru]</>",
            localization.language_arg_desc,
            localization.allowed_values
        ))
        .value_parser(["en", "ru"])
        .display_order(4);

    let log_flag = Arg::new("log")
        .short('L')
        .long("log")
        .action(ArgAction::SetTrue)
        .help(localization.log_arg_desc)
        .display_order(5);

    let version_flag = Arg::new("version")
        .short('v')
        .long("version")
        .action(ArgAction::Version)
        .help(localization.version_flag_desc)
        .display_order(98);

    let help_flag = Arg::new("help")
        .short('h')
        .long("help")
        .help(localization.help_arg_desc)
        .action(ArgAction::Help)
        .display_order(99);

    Command::new("renpy-rpt-rs")
        .version(crate_version!())
        .disable_version_flag(true)
        .disable_help_flag(true)
        .next_line_help(true)
        .term_width(120)
        .about(localization.about_msg)
        .help_template(localization.help_template)
        .args([
            input_dir_arg,
            output_file_arg,
            fill_flag,
            language_arg,
            log_flag,
            version_flag,
            help_flag,
        ])
}

fn run(
    input_dir: &Path,
    output_file: &Path,
    fill: bool,
    logging: bool,
    localization: &Localization,
) {
    let mut script_files: Vec<PathBuf> = WalkDir::new(input_dir)
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.path().extension().is_some_and(|extension| extension == "rpy")
        })
        .map(|entry| entry.into_path())
        .collect();

    if script_files.is_empty() {
        eprintln!("{}", localization.no_scripts_found_msg);
        exit(1);
    }

    // The UI source, if present, contributes the template's first section.
    let screens_path: PathBuf = input_dir.join("screens.rpy");

    let label_count: usize = if screens_path.is_file() {
        println!("{}", localization.processing_screens_msg);

        let content: String = read_source(&screens_path, localization.decode_error_msg);
        let labels: Vec<TextUnit> = extract_screen_texts(&content);

        if labels.is_empty() {
            println!("{}", localization.no_labels_found_msg);
        }

        write_ui_section(output_file, &labels, fill);

        if !labels.is_empty() {
            println!(
                "{} {} → {}",
                localization.extracted_labels_msg,
                labels.len(),
                output_file.display()
            );
        }

        labels.len()
    } else {
        println!("{}", localization.screens_file_missing_msg);
        // The script section appends, so the file has to exist either way.
        File::create(output_file).unwrap();
        0
    };

    // The main script goes first, so its definitions are discovered first.
    let script_path: PathBuf = input_dir.join("script.rpy");

    if let Some(position) = script_files.iter().position(|path| *path == script_path) {
        let main_script: PathBuf = script_files.remove(position);
        script_files.insert(0, main_script);
    }

    let sources: Vec<(PathBuf, String)> = script_files
        .into_par_iter()
        .map(|path| {
            let content: String = read_source(&path, localization.decode_error_msg);
            (path, content)
        })
        .collect();

    // Dialogue cannot be told apart from narration without known speakers.
    let char_names: Vec<String> = gather_char_names(&sources);

    if char_names.is_empty() {
        eprintln!("{}", localization.no_character_definitions_msg);
        exit(1);
    }

    let (single_re, multi_re) = build_patterns(&char_names);

    let extracted: Vec<Vec<TextUnit>> = sources
        .par_iter()
        .map(|(_, content)| {
            extract_dialogues(content, &single_re, &multi_re, localization.malformed_escape_msg)
        })
        .collect();

    if logging {
        for (path, _) in &sources {
            println!("{} {}", localization.parsed_file_msg, path.display());
        }
    }

    let texts: Xxh3IndexSet = unique_texts(extracted.into_iter().flatten().collect());

    if label_count == 0 && texts.is_empty() {
        eprintln!("{}", localization.no_text_extracted_msg);
        exit(1);
    }

    append_script_section(output_file, &texts, fill);

    // The two sections may overlap, and the second pass also unifies their
    // line endings.
    deduplicate_template(output_file);

    println!(
        "{} {}",
        localization.detected_characters_msg,
        char_names.join(", ")
    );
    println!(
        "{} {} → {}",
        localization.extracted_lines_msg,
        texts.len(),
        output_file.display()
    );
}

fn main() {
    let start_time: Instant = Instant::now();

    let language: Language = preparse_args();
    let localization: Localization = Localization::new(language);
    let cli: Command = setup_cli(&localization);
    let matches = cli.get_matches();

    let input_dir: &PathBuf = matches.get_one::<PathBuf>("input-dir").unwrap();

    if !input_dir.exists() {
        eprintln!("{}", localization.input_dir_missing);
        exit(1);
    }

    let output_file: &PathBuf = matches.get_one::<PathBuf>("output-file").unwrap();
    let fill: bool = matches.get_flag("fill-template");
    let logging: bool = matches.get_flag("log");

    run(input_dir, output_file, fill, logging, &localization);

    println!(
        "{} {:.2}s",
        localization.elapsed_time_msg,
        start_time.elapsed().as_secs_f32()
    );
}
