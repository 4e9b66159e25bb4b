fn main() -> anyhow::Result<()> {
    dropfit_demo::entry_point()
}
