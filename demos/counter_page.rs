//! Builds a small page — a clipped panel, a counter label, an animated
//! sprite — runs a few frames, and prints the command stream a backend
//! would consume. Run with `RUST_LOG=debug` for the tree's own logging.

use flipbook::prelude::*;

fn main() {
    env_logger::init();

    let mut book = Book::new(320, 180);

    book.resources_mut()
        .add_font("body", FontFace::new(vec![0u8; 4], 16))
        .expect("fresh resource table");
    let tiles = Bitmap::from_pixels(64, 16, vec![0xFFu8; 64 * 16 * 4]);
    book.resources_mut()
        .add_tileset("coin", Tileset::new(tiles, 16, 16))
        .expect("fresh resource table");

    let page = book.add_page("cover").expect("fresh book");

    // A clipped panel with a spinning child poking past its bounds
    let window = page.add(
        Node::new("window", Panel::new(Color::from_hex(0x223344))).with_draw_order(1.0),
    );
    page.set_size(window, 120, 80);
    page.set_position(window, 20, 20);
    page.stage_mut().set_hide_overflow(window, true);

    let coin = page.insert(window, Node::new("coin", Sheet::new("coin")));
    page.set_size(coin, 24, 24);
    page.set_position(coin, 100, 30);
    page.stage_mut().animate(coin, Spin::new(0.5));
    if let Some(sheet) = page.stage_mut().behavior_mut::<Sheet>(coin) {
        sheet.play(0, 3, 120.0);
    }
    page.stage_mut().enable_updating(coin);

    // A counter drawn above the panel
    let counter = page.add(
        Node::new("counter", Label::new("body", "frame 0")).with_draw_order(2.0),
    );
    page.set_size(counter, 80, 16);
    page.set_position(counter, 8, 8);

    book.renderer_ready();

    let mut frame = Frame::new();
    for n in 0..5u32 {
        book.update(16.7);

        let page = book.page_mut("cover").expect("page exists");
        let counter = page.find("counter").expect("counter exists");
        if let Some(label) = page.stage_mut().behavior_mut::<Label>(counter) {
            label.set_text(format!("frame {n}"));
        }

        frame.reset();
        book.draw(&mut frame, &Transform::IDENTITY);
        println!("frame {n}: {} commands", frame.len());
    }

    for command in frame.commands() {
        match command {
            Command::Stencil(s) => println!("  stencil {:?} ref {}", s.mode, s.reference),
            Command::Rect { rect, .. } => println!("  rect {}x{}", rect.width, rect.height),
            Command::Tile { tileset, uv, .. } => {
                println!("  tile '{}' uv ({:.2}, {:.2})", tileset, uv.x, uv.y)
            }
            Command::Sprite { image, .. } => println!("  sprite '{image}'"),
            Command::Text { text, .. } => println!("  text '{text}'"),
        }
    }
}
