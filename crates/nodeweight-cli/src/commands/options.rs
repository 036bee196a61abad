pub fn split(options: &str) -> anyhow::Result<()> {
    for token in nodeweight_core::split_options(options)? {
        println!("{token}");
    }
    Ok(())
}
