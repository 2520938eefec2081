use color_print::cstr;

pub enum Language {
    English,
    Russian,
}

pub struct Localization<'a> {
    // About message and templates
    pub about_msg: &'a str,
    pub help_template: &'a str,

    // Argument descriptions
    pub input_dir_arg_desc: &'a str,
    pub output_file_arg_desc: &'a str,
    pub fill_flag_desc: &'a str,
    pub language_arg_desc: &'a str,
    pub log_arg_desc: &'a str,
    pub help_arg_desc: &'a str,
    pub version_flag_desc: &'a str,

    // Argument types
    pub input_path_arg_type: &'a str,
    pub output_path_arg_type: &'a str,
    pub language_arg_type: &'a str,

    // Messages and warnings
    pub input_dir_missing: &'a str,
    pub no_scripts_found_msg: &'a str,
    pub no_character_definitions_msg: &'a str,
    pub no_text_extracted_msg: &'a str,
    pub processing_screens_msg: &'a str,
    pub screens_file_missing_msg: &'a str,
    pub no_labels_found_msg: &'a str,
    pub extracted_labels_msg: &'a str,
    pub extracted_lines_msg: &'a str,
    pub detected_characters_msg: &'a str,
    pub parsed_file_msg: &'a str,
    pub malformed_escape_msg: &'a str,
    pub decode_error_msg: &'a str,
    pub elapsed_time_msg: &'a str,

    // Misc
    pub allowed_values: &'a str,
    pub default_value: &'a str,
}

impl Localization<'_> {
    pub const fn new(language: Language) -> Self {
        match language {
            Language::English => Self::init_en(),
            Language::Russian => Self::init_ru(),
        }
    }

    const fn init_en() -> Self {
        Localization {
            // About message and templates
            about_msg: cstr!(
                r#"<bold>This tool scans a Ren'Py game's .rpy scripts for character dialogue, menu choices and interface captions, and generates an .rpt translation template from them, as used by Ren'Py versions before 6.15. Every unique line is written once, as a "<< source" / ">> translation" pair.</>"#
            ),
            help_template: cstr!(
                "{about}\n\n<underline,bold>Usage:</> renpy-rpt-rs [OPTIONS]\n\n<underline,bold>Options:</>\n{options}"
            ),

            // Argument descriptions
            input_dir_arg_desc: "Root directory containing the game's .rpy files.",
            output_file_arg_desc: "Output .rpt template file.",
            fill_flag_desc: "Copy each source line into its translation line instead of leaving the translation empty.",
            language_arg_desc: "Sets the localization of the tool to the selected language.",
            log_arg_desc: "Enables logging.",
            help_arg_desc: "Prints the program's help message.",
            version_flag_desc: "Show program's version.",

            // Argument types
            input_path_arg_type: "INPUT_PATH",
            output_path_arg_type: "OUTPUT_PATH",
            language_arg_type: "LANGUAGE",

            // Messages and warnings
            input_dir_missing: "Input directory does not exist.",
            no_scripts_found_msg: "No .rpy files found under the input directory.",
            no_character_definitions_msg:
                "No character definitions ('$' or 'define') found in any .rpy file.",
            no_text_extracted_msg: "No translatable text found in any .rpy file.",
            processing_screens_msg: "Processing label & button texts from screens.rpy...",
            screens_file_missing_msg:
                "Warning: screens.rpy not found, moving to script.rpy and other files.",
            no_labels_found_msg: "Warning: no label or button texts are found in screens.rpy.",
            extracted_labels_msg: "Extracted label & button texts:",
            extracted_lines_msg: "Extracted dialogue lines:",
            detected_characters_msg: "Detected characters:",
            parsed_file_msg: "Parsed file",
            malformed_escape_msg: "Malformed escape sequence in string literal:",
            decode_error_msg: "Malformed UTF-8 in source file:",
            elapsed_time_msg: "Elapsed time:",

            // Misc
            allowed_values: "Allowed values:",
            default_value: "Default value:",
        }
    }

    const fn init_ru() -> Self {
        Localization {
            about_msg: cstr!(
                r#"<bold>Инструмент, сканирующий .rpy скрипты игры на движке Ren'Py на предмет диалогов персонажей, пунктов меню и надписей интерфейса, и генерирующий из них шаблон перевода .rpt, использовавшийся версиями Ren'Py до 6.15. Каждая уникальная строка записывается один раз, в виде пары "<< оригинал" / ">> перевод".</>"#
            ),
            help_template: cstr!(
                "{about}\n\n<underline,bold>Использование:</> renpy-rpt-rs [ОПЦИИ]\n\n<underline,bold>Опции:</>\n{options}"
            ),

            input_dir_arg_desc: "Входная директория, содержащая .rpy файлы игры.",
            output_file_arg_desc: "Выходной .rpt файл шаблона перевода.",
            fill_flag_desc: "Копировать каждую исходную строку в строку перевода вместо того, чтобы оставлять перевод пустым.",
            language_arg_desc: "Устанавливает локализацию инструмента на выбранный язык.",
            log_arg_desc: "Включает логирование.",
            help_arg_desc: "Выводит справочную информацию по программе.",
            version_flag_desc: "Отобразить версию программы.",

            input_path_arg_type: "ВХОДНОЙ_ПУТЬ",
            output_path_arg_type: "ВЫХОДНОЙ_ПУТЬ",
            language_arg_type: "ЯЗЫК",

            input_dir_missing: "Входная директория не существует.",
            no_scripts_found_msg: "Во входной директории не найдено .rpy файлов.",
            no_character_definitions_msg:
                "Ни в одном .rpy файле не найдено определений персонажей ('$' или 'define').",
            no_text_extracted_msg: "Ни в одном .rpy файле не найдено переводимого текста.",
            processing_screens_msg: "Обработка надписей и кнопок из screens.rpy...",
            screens_file_missing_msg:
                "Предупреждение: screens.rpy не найден, переходим к script.rpy и остальным файлам.",
            no_labels_found_msg:
                "Предупреждение: в screens.rpy не найдено надписей или текстов кнопок.",
            extracted_labels_msg: "Извлечено надписей и текстов кнопок:",
            extracted_lines_msg: "Извлечено строк диалогов:",
            detected_characters_msg: "Обнаруженные персонажи:",
            parsed_file_msg: "Распарсен файл",
            malformed_escape_msg: "Некорректная escape-последовательность в строковом литерале:",
            decode_error_msg: "Некорректный UTF-8 в исходном файле:",
            elapsed_time_msg: "Затраченное время:",

            allowed_values: "Разрешённые значения:",
            default_value: "Значение по умолчанию:",
        }
    }
}
