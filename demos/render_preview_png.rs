use std::path::PathBuf;

use phishflow::{CompositionDescriptor, FrameIndex, render_frame, write_png};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let comp = CompositionDescriptor::phishing_flow();
    let out_dir = PathBuf::from("target").join("preview");

    for f in [20u64, 80, 92, 97, 150] {
        let frame = render_frame(&comp, FrameIndex(f))?;
        let path = out_dir.join(format!("phishing_flow_{f:03}.png"));
        write_png(&frame, &path)?;
        eprintln!("wrote {}", path.display());
    }

    Ok(())
}
