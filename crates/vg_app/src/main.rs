fn main() -> eframe::Result<()> {
    vg_app::launch()
}
