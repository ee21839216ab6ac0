use std::path::Path;

use ngharness::config::ConfigWarning;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], json: bool) {
    if json {
        return;
    }

    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
