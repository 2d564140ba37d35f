//! Constants used throughout the plugin composer engine

/// Stub entry-point file, renamed to `<slug>.php` after rewriting.
pub const STUB_ENTRY_FILE: &str = "plugin-stub.php";

/// Stub main class file, renamed to `includes/<PascalCase>.php`.
pub const STUB_CLASS_FILE: &str = "includes/PluginStub.php";

/// Single-line marker replaced with REST route registration code.
pub const REGISTER_ROUTE_MARKER: &str = "// REGISTER_SETTINGS_REST_ROUTE";

/// Single-line marker replaced with settings class construction code, or
/// removed outright when the settings module is excluded.
pub const INIT_CLASSES_MARKER: &str = "// INIT_PLUGIN_SETTINGS_CLASSES";

/// Replacement for the route marker when settings are included.
pub const REGISTER_ROUTE_CODE: &str =
    "$this->container['admin_settings_rest']->register_routes();";

/// Replacement for the route marker when settings are excluded.
pub const REGISTER_ROUTE_COMMENT: &str = "// Register your REST routes here";

/// Replacement for the init-classes marker when settings are included.
pub const INIT_CLASSES_CODE: &str = "$this->container['admin_settings'] = new Admin\\Settings();\n\t\t$this->container['admin_settings_rest'] = new Admin\\REST\\SettingsController();";

/// Marker in README.md for the development command block.
pub const NODE_DEV_COMMANDS_MARKER: &str = "NODE_DEVELOPMENT_COMMANDS";

/// Marker in README.md and bin/build.sh for the production command block.
pub const NODE_PROD_COMMANDS_MARKER: &str = "NODE_PRODUCTION_COMMANDS";

pub const NODE_DEV_COMMANDS: &str = "npm install\nnpm run start";

pub const NODE_PROD_COMMANDS: &str = "npm install\nnpm run build";

pub const NODE_PROD_COMMANDS_BUILD_SH: &str =
    "status 'Installing npm dependencies... \u{1F4E6}'\nnpm install\nnpm run build";

/// Files carrying feature-conditional command block markers.
pub const README_FILE: &str = "README.md";
pub const BUILD_SCRIPT_FILE: &str = "bin/build.sh";

/// Namespace token used across the stub trees.
pub const NAMESPACE_TOKEN: &str = "BaseNameSpace";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Default values for the explicit placeholder fields.
pub mod defaults {
    pub const DESCRIPTION: &str = "Custom plugin by weLabs";
    pub const LICENSE: &str = "GPL2";
    pub const PLUGIN_URI: &str = "https://welabs.dev";
    pub const AUTHOR_NAME: &str = "WeLabs";
    pub const AUTHOR_EMAIL: &str = "contact@welabs.dev";
    pub const AUTHOR_URI: &str = "https://welabs.dev";
    pub const NAMESPACE: &str = "MyPlugin";
}

/// Field length limits for build request validation.
pub mod limits {
    pub const MAX_PLUGIN_NAME_LENGTH: usize = 100;
    pub const MAX_DESCRIPTION_LENGTH: usize = 500;
    pub const MAX_LICENSE_LENGTH: usize = 50;
    pub const MAX_AUTHOR_NAME_LENGTH: usize = 100;
    pub const MAX_NAMESPACE_LENGTH: usize = 100;
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
