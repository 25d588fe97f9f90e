// Example: run one layout + draw frame and print the recorded divider fills.
use viewtype_decoration::peniko::Color;
use viewtype_decoration::{ContainerBounds, DecorationConfig};
use viewtype_decoration_adapter::{DecorationController, ListSnapshot};

fn main() {
    let config = DecorationConfig::builder()
        .default_space_with_insets(3, 45, 45)
        .divider_color(Color::from_rgba8(0, 0, 255, 255))
        .build();

    let host = ListSnapshot::stacked(vec![1; 6], ContainerBounds::from_width(1080), 150);
    let mut controller = DecorationController::new(config);

    let frame = controller.frame(&host);
    for (key, offsets) in &frame.offsets {
        println!("item={key} offsets={offsets:?}");
    }
    for rect in frame.display_list.rects() {
        println!("divider={rect:?}");
    }
}
