#[cfg(feature = "gpui")]
use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

#[cfg(feature = "gpui")]
use encoding_panel::{
    AggregationKind, Encoding, EncodingHandle, EncodingPanel, FormTree, GpuiEncodingPanel,
};

#[cfg(feature = "gpui")]
fn main() {
    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(420.0), px(220.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let encoding = EncodingHandle::new(
                Encoding::new()
                    .with_x("time")
                    .with_y("temperature")
                    .with_y_aggregation(AggregationKind::Avg),
            );
            let observed = encoding.clone();
            let mut tree = FormTree::new();
            let panel = EncodingPanel::new(
                ["time", "sensor", "temperature", "humidity"],
                encoding,
                move || println!("{:?}", observed.snapshot()),
                &mut tree,
            )
            .expect("demo panel");

            let view = GpuiEncodingPanel::new(panel.root().clone());
            cx.new(|_| view)
        })
        .unwrap();
    });
}

#[cfg(not(feature = "gpui"))]
fn main() {
    eprintln!("Enable the gpui feature to run this example.");
}
