use tinct::{Color, Css, Hsla, Model};

fn main() {
    // A wheel of twelve hues at two lightness levels
    for lightness in [0.25, 0.5] {
        for step in 0..12 {
            let hsla = Hsla::new(f64::from(step) * 30.0, 1.0, lightness, 1.0);
            let css = Css::from_color(&hsla);
            let [r, g, b, _] = css.to_rgba8();

            println!(
                "\x1b[48;2;{};{};{}m      \x1b[0m  {:>5.1}°  {}  {}",
                r,
                g,
                b,
                hsla.h,
                css.hex_string(),
                css
            );
        }
        println!();
    }

    // The same translucent teal in every model
    let teal = Css::new(0x00, 0x80, 0x80, 0.5);
    for model in [Model::Rgba, Model::Css, Model::Hsla, Model::Hsva] {
        println!("{:>4}  {:?}", model.name(), model.convert(&teal));
    }
}
