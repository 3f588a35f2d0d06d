use std::collections::HashMap;
use std::path::Path;

pub const NO_EXTENSION: &str = "(none)";

/// Maps a lower-case file extension (without the dot) to a language name.
pub trait LanguageLookup {
    fn language_for(&self, extension: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLanguages;

impl LanguageLookup for BuiltinLanguages {
    fn language_for(&self, extension: &str) -> Option<&str> {
        let name = match extension {
            "py" | "pyi" => "Python",
            "ts" | "tsx" => "TypeScript",
            "js" | "jsx" | "mjs" | "cjs" => "JavaScript",
            "rs" => "Rust",
            "go" => "Go",
            "java" => "Java",
            "cs" => "C#",
            "kt" | "kts" => "Kotlin",
            "c" | "h" => "C",
            "cpp" | "cc" | "cxx" | "c++" | "hpp" | "hh" | "hxx" | "h++" => "C++",
            "swift" => "Swift",
            "rb" => "Ruby",
            "php" => "PHP",
            "scala" => "Scala",
            "dart" => "Dart",
            "lua" => "Lua",
            "r" => "R",
            "sh" | "bash" | "zsh" => "Shell",
            "ps1" => "PowerShell",
            "sql" => "SQL",
            "html" | "htm" => "HTML",
            "css" | "scss" | "sass" | "less" => "CSS",
            "vue" => "Vue",
            "svelte" => "Svelte",
            "md" | "markdown" => "Markdown",
            "json" => "JSON",
            "yaml" | "yml" => "YAML",
            "toml" => "TOML",
            "xml" => "XML",
            "ipynb" => "Jupyter Notebook",
            _ => return None,
        };
        Some(name)
    }
}

impl LanguageLookup for HashMap<String, String> {
    fn language_for(&self, extension: &str) -> Option<&str> {
        self.get(extension).map(String::as_str)
    }
}

/// Language label for a path: the looked-up name, else the extension
/// upper-cased, else [`NO_EXTENSION`].
pub fn language_label(path: &str, lookup: &dyn LanguageLookup) -> String {
    let Some(ext) = Path::new(path).extension().and_then(|e| e.to_str()) else {
        return NO_EXTENSION.to_string();
    };
    let ext = ext.to_lowercase();
    match lookup.language_for(&ext) {
        Some(name) => name.to_string(),
        None => ext.to_uppercase(),
    }
}
