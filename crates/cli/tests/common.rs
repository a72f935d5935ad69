use assert_cmd::{Command, cargo::cargo_bin_cmd};
use inliner_util::{TempDir, temp_dir};

/// Destination page with an un-inlined placeholder
pub const PAGE: &str = "import Demo from './Demo';

const codeExample = `// Full component code available in the repository
OLD
`;

export default Page;
";

/// Get a command to run Inliner, plus a temp directory holding a source file
/// (`Component.tsx`) and a destination page (`Page.tsx`)
pub fn inliner(source: &str, page: &str) -> (Command, TempDir) {
    let dir = temp_dir();
    dir.write("Component.tsx", source);
    dir.write("Page.tsx", page);
    (command(&dir), dir)
}

/// Get a fresh command that runs in the given directory
pub fn command(dir: &TempDir) -> Command {
    let mut command = cargo_bin_cmd!("inliner_cli");
    command.current_dir(&**dir);
    command
}
