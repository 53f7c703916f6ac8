use phishflow::{CompositionDescriptor, FrameIndex};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let comp = CompositionDescriptor::phishing_flow();
    for f in [0u64, 15, 30, 45, 60, 75, 91, 95, 120, 239] {
        let state = comp.eval_frame(FrameIndex(f))?;
        let painted: Vec<_> = state.visible().map(|e| e.id).collect();
        println!("frame {f:>3}: {}", painted.join(", "));
    }

    Ok(())
}
