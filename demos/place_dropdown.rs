use anchored::{
    CssPosition, DropdownBinder, DropdownOptions, MemoryDocument, NodeSpec, Pass, PlacementConfig,
    Rect, RootRef,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let body = NodeSpec::new("body", Rect::new(0.0, 0.0, 640.0, 360.0)).with_child(
        NodeSpec::new("form", Rect::new(20.0, 20.0, 620.0, 340.0))
            .with_id("form")
            .with_position(CssPosition::Relative)
            .with_child(
                NodeSpec::new("select", Rect::new(40.0, 300.0, 240.0, 330.0)).with_id("select"),
            )
            .with_child(NodeSpec::new("ul", Rect::new(0.0, 0.0, 200.0, 120.0)).with_id("options")),
    );
    let mut doc = MemoryDocument::from_spec(&body)?;

    let options = DropdownOptions {
        config: PlacementConfig {
            keep_anchor_width: true,
            auto_placement: true,
            stick_to_edges: true,
            offset: Some(4.0.into()),
        },
        root: Some(RootRef::from("#options")),
        viewport: Some(doc.body_id()),
    };
    let mut binder = DropdownBinder::new(
        doc.get_by_id("select"),
        doc.get_by_id("options"),
        "bottom-start".parse()?,
        options,
    )?;

    match binder.update(&mut doc) {
        Pass::Applied(pass) => {
            println!("placement: {}", pass.outcome.placement);
            println!("style:     {}", pass.style);
        }
        other => println!("{other:?}"),
    }

    // A second notification with identical measurements writes nothing.
    println!("again:     {:?}", binder.update(&mut doc));
    Ok(())
}
