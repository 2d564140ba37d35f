//! Shared fixtures for integration tests: a synthetic stub template tree
//! exposing the same manifest-relative paths, markers and placeholder tokens
//! as the real stub plugins.

use std::fs;
use std::path::Path;

pub const STUB_ENTRY: &str = r#"<?php
/**
 * Plugin Name: Plugin Stub
 * Description: plugin_description
 * Plugin URI: plugin_uri
 * Author: plugin_author_name
 * Author URI: plugin_author_uri
 * License: plugin_license
 * Requires Plugins: plugin_requires
 * Text Domain: plugin-stub
 */

use BaseNameSpace\PluginStub\PluginStub;

if ( ! defined( 'PLUGIN_STUB_FILE' ) ) {
    define( 'PLUGIN_STUB_FILE', __FILE__ );
}

function BaseNameSpace_plugin_stub() {
    return PluginStub::init();
}

BaseNameSpace_plugin_stub();
"#;

pub const STUB_CLASS: &str = r#"<?php

namespace BaseNameSpace\PluginStub;

class PluginStub {
    public function register_routes() {
        // REGISTER_SETTINGS_REST_ROUTE
    }

    private function init_classes() {
        // INIT_PLUGIN_SETTINGS_CLASSES
    }
}
"#;

pub const STUB_README: &str = "# Plugin Stub\n\n\
## Development\n\nNODE_DEVELOPMENT_COMMANDS\n\n\
## Production\n\nNODE_PRODUCTION_COMMANDS\n";

pub const STUB_BUILD_SH: &str = "#!/bin/bash\nset -e\nNODE_PRODUCTION_COMMANDS\n";

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Materializes a complete stub template tree under `root`, covering every
/// core and settings manifest entry.
pub fn create_stub_template(root: &Path) {
    write(&root.join(".github/workflows/ci.yml"), "name: ci\n");
    write(&root.join("assets/admin.css"), ".plugin-stub {}\n");
    write(&root.join("bin/build.sh"), STUB_BUILD_SH);
    write(&root.join("includes/Assets.php"), "<?php // Plugin Stub assets\n");
    write(&root.join("includes/PluginStub.php"), STUB_CLASS);
    write(&root.join("templates/main.php"), "<p>Plugin Stub</p>\n");
    write(&root.join(".gitignore"), "node_modules\n");
    write(&root.join("composer.json"), r#"{"name": "welabs/plugin-stub"}"#);
    write(&root.join("phpcs.xml"), "<ruleset name=\"Plugin Stub\"/>\n");
    write(&root.join("plugin-stub.php"), STUB_ENTRY);
    write(&root.join("README.md"), STUB_README);

    // Settings feature subset.
    write(&root.join("src/index.js"), "console.log('plugin_stub');\n");
    write(&root.join("src/admin.js"), "// PluginStub admin\n");
    write(
        &root.join("includes/Admin/Settings.php"),
        "<?php namespace BaseNameSpace\\PluginStub\\Admin;\n",
    );
    write(
        &root.join("includes/Admin/REST/SettingsController.php"),
        "<?php namespace BaseNameSpace\\PluginStub\\Admin\\REST;\n",
    );
    write(&root.join("package.json"), r#"{"name": "plugin-stub"}"#);
    write(&root.join("postcss.config.js"), "module.exports = {};\n");
    write(&root.join("tailwind.config.js"), "module.exports = {};\n");
    write(&root.join("webpack.config.js"), "module.exports = {};\n");
}
