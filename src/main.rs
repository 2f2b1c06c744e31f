fn main() -> std::io::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(rocket_game::run_with_config());

    // A blocking stdin read cannot be cancelled; do not wait on it when output closed first.
    runtime.shutdown_background();
    result
}
