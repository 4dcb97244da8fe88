use todo_manager::commands::Cli;
use todo_manager::libs::logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::menu()
}
