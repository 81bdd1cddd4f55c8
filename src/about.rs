pub const MUTANT_DISPLAY_VERSION: &str = env!("MUTANT_DISPLAY_VERSION");
pub const MUTANT_BUILD_N: &str = env!("MUTANT_BUILD_N");

pub fn version_cli_text() -> String {
    format!(
        "mutant_cli {}\nBuild {}\nRepeated-base run detector for square DNA matrices",
        MUTANT_DISPLAY_VERSION, MUTANT_BUILD_N
    )
}
