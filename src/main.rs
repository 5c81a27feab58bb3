fn main() -> anyhow::Result<()> {
    messenger_history_parser::cli::run()
}
