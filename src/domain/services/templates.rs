//! Fixed documents written into the scaffold project
//!
//! Every builder here is a pure function of its arguments so the exact output
//! can be asserted without touching the file system.

use serde_json::{json, Value};

use crate::config::KarmaConfig;

/// Builder used for the injected `architect.test` target
pub const KARMA_BUILDER: &str = "@angular-devkit/build-angular:karma";

/// Project-relative file names the test target points at
pub const TEST_ENTRY: &str = "src/test.ts";
pub const POLYFILLS_ENTRY: &str = "src/polyfills.ts";
pub const TSCONFIG_SPEC: &str = "tsconfig.spec.json";
pub const KARMA_CONF: &str = "karma.conf.js";

/// The `architect.test` block injected into `angular.json`
pub fn test_architect_target() -> Value {
    json!({
        "builder": KARMA_BUILDER,
        "options": {
            "main": TEST_ENTRY,
            "polyfills": POLYFILLS_ENTRY,
            "tsConfig": TSCONFIG_SPEC,
            "karmaConfig": KARMA_CONF,
            "assets": [
                "src/favicon.ico",
                "src/assets"
            ],
            "styles": [
                "src/styles.css"
            ],
            "scripts": []
        }
    })
}

/// Contents of `tsconfig.spec.json`
pub fn tsconfig_spec() -> Value {
    json!({
        "extends": "./tsconfig.json",
        "compilerOptions": {
            "outDir": "./out-tsc/spec",
            "types": [
                "jasmine",
                "node"
            ]
        },
        "files": [
            TEST_ENTRY,
            POLYFILLS_ENTRY
        ],
        "include": [
            "src/**/*.spec.ts",
            "src/**/*.d.ts"
        ]
    })
}

const KARMA_TEMPLATE: &str = r#"// Karma configuration file

module.exports = function (config) {
  config.set({
    basePath: '',
    frameworks: ['jasmine', '@angular-devkit/build-angular'],
    plugins: [
      require('karma-jasmine'),
      require('karma-chrome-launcher'),
      require('karma-jasmine-html-reporter'),
      require('karma-coverage'),
      require('@angular-devkit/build-angular/plugins/karma')
    ],
    client: {
      jasmine: {
        // Jasmine options, see https://jasmine.github.io/api/edge/Configuration.html
      },
      clearContext: false // leave Jasmine Spec Runner output visible in browser
    },
    jasmineHtmlReporter: {
      suppressAll: true // removes the duplicated traces
    },
    coverageReporter: {
      dir: require('path').join(__dirname, './coverage/__PROJECT__'),
      subdir: '.',
      reporters: [
        { type: 'html' },
        { type: 'text-summary' }
      ]
    },
    reporters: ['progress', 'kjhtml'],
    port: __PORT__,
    colors: true,
    logLevel: config.LOG_INFO,
    autoWatch: true,
    browsers: [__BROWSER__],
    singleRun: __SINGLE_RUN__,
    restartOnFileChange: true
  });
};
"#;

/// Contents of `karma.conf.js`
pub fn karma_conf(karma: &KarmaConfig, project_name: &str) -> String {
    KARMA_TEMPLATE
        .replace("__PROJECT__", &escape_js_single_quoted(project_name))
        .replace("__PORT__", &karma.port.to_string())
        .replace("__BROWSER__", &js_string(&karma.browser))
        .replace("__SINGLE_RUN__", if karma.single_run { "true" } else { "false" })
}

/// Contents of `src/polyfills.ts`
pub const POLYFILLS_TS: &str = r#"/**
 * Polyfills needed by Angular, loaded before the app and the test bootstrap.
 *
 * Browser polyfills go above the Zone JS import; application imports that must
 * run before the main file go below it.
 */

/***************************************************************************************************
 * BROWSER POLYFILLS
 */

/**
 * Zone JS is required by default for Angular itself.
 */
import 'zone.js';  // Included with Angular CLI.

/***************************************************************************************************
 * APPLICATION IMPORTS
 */
"#;

/// Contents of `src/test.ts`: initializes the testing platform and loads every spec
pub const TEST_TS: &str = r#"import 'zone.js/testing';
import { getTestBed } from '@angular/core/testing';
import {
  BrowserDynamicTestingModule,
  platformBrowserDynamicTesting
} from '@angular/platform-browser-dynamic/testing';

declare const require: {
  context(path: string, deep?: boolean, filter?: RegExp): {
    keys(): string[];
    <T>(id: string): T;
  };
};

// First, initialize the Angular testing environment.
getTestBed().initTestEnvironment(
  BrowserDynamicTestingModule,
  platformBrowserDynamicTesting()
);
// Then we find all the tests.
const context = require.context('./', true, /\.spec\.ts$/);
// And load the modules.
context.keys().map(context);
"#;

fn escape_js_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn js_string(value: &str) -> String {
    format!("'{}'", escape_js_single_quoted(value))
}
