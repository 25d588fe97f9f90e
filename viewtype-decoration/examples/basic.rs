// Example: offsets for a sectioned single-column list.
use viewtype_decoration::{
    DecorationConfig, ItemPlacement, LayoutStrategy, UniformSpans, compute_offsets,
    previous_view_type,
};

const HEADER: i32 = 1;
const ROW: i32 = 2;

fn main() {
    let config = DecorationConfig::builder()
        .first_space(8)
        .default_space(1)
        .side_space(ROW, 16)
        .adjacent_space(ROW, HEADER, 24)
        .build();

    let types = [HEADER, ROW, ROW, HEADER, ROW];
    for position in 0..types.len() {
        let previous = previous_view_type(position, |p| types[p]);
        let offsets = compute_offsets(
            position,
            types[position],
            previous,
            ItemPlacement::linear(position),
            &config,
        );
        println!("position={position} type={} offsets={offsets:?}", types[position]);
    }

    // The same rules in a three-column grid.
    let spans = UniformSpans;
    let grid = LayoutStrategy::grid(3, &spans);
    for position in 0..5 {
        println!("grid position={position} placement={:?}", grid.classify(position));
    }
}
