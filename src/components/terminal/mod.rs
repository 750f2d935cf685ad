mod banner;
mod input;
mod output;
mod projects;
mod shell;

pub use banner::Banner;
pub use input::Input;
pub use output::Output;
pub use projects::Projects;
pub use shell::Shell;
