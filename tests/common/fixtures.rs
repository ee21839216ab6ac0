//! Stand-ins for the Node toolchain.

use std::path::{Path, PathBuf};

/// `npx @angular/cli new <name> --minimal`: creates a bare project in the cwd
pub const FAKE_NPX: &str = r#"#!/bin/sh
name="$3"
mkdir -p "$name/src/app"
printf '{"version":1,"projects":{"%s":{"root":"","sourceRoot":"src","architect":{"build":{}}}}}' "$name" > "$name/angular.json"
echo "export class AppComponent {}" > "$name/src/app/app.component.ts"
echo "CREATE $name/angular.json"
"#;

/// `npm ...`: appends its arguments to `npm.log` in the cwd
pub const FAKE_NPM: &str = r#"#!/bin/sh
echo "$*" >> npm.log
"#;

/// `npm ...` that always fails
pub const FAILING_NPM: &str = r#"#!/bin/sh
echo "npm ERR! network" >&2
exit 3
"#;

/// Write an executable shell script into `dir`
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, body).expect("Failed to write script");
    let mut perms = std::fs::metadata(&path).expect("script metadata").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("Failed to chmod script");
    path
}

pub const COMPONENT_TS: &str = "export class widget {}\n";
pub const SERVICE_TS: &str = "export class auth {}\n";
