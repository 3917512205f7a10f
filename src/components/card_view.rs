//! The card itself.
//!
//! Everything shown here is derived from the session's current
//! [`CardConfig`] through [`CardView`]; nothing is cached between renders.

use cardsmith_core::{BackgroundLayout, CardConfig, CardImage, CardView, CornerOrnament};
use dioxus::prelude::*;

use super::centerpiece::CenterpieceView;
use crate::context::use_session;

const STAR_PATH: &str = "M11.48 3.499a.562.562 0 011.04 0l2.125 5.111a.563.563 0 00.475.321h5.365a.562.562 0 01.321.988l-4.204 3.602a.563.563 0 00-.182.557l1.285 5.385a.562.562 0 01-.84.61l-4.725-2.885a.563.563 0 00-.586 0L6.982 20.54a.562.562 0 01-.84-.61l1.285-5.386a.562.562 0 00-.182-.557l-4.204-3.602a.563.563 0 01.321-.988h5.365a.563.563 0 00.475-.321L11.48 3.5z";
const PETAL_PATH: &str = "M50,0 C60,0 70,10 70,20 C70,30 60,40 50,40 C40,40 30,30 30,20 C30,10 40,0 50,0 Z";

/// The four corners, with the mirroring each floral ornament needs
const CORNERS: [(&str, &str); 4] = [
    ("top-left", "none"),
    ("top-right", "scaleX(-1)"),
    ("bottom-left", "scaleY(-1)"),
    ("bottom-right", "scale(-1, -1)"),
];

/// Grid placement for collage cell `index`, as inline CSS
fn collage_cell_style(layout: BackgroundLayout, index: usize) -> &'static str {
    match layout {
        BackgroundLayout::Collage { tall_first: true, columns: 2, .. } => match index {
            0 => "grid-row: span 2;",
            1 => "grid-column-start: 2;",
            _ => "grid-column-start: 2; grid-row-start: 2;",
        },
        BackgroundLayout::Collage { tall_first: true, .. } => match index {
            0 => "grid-row: span 2;",
            3 => "grid-column-start: 2; grid-row-start: 2;",
            4 => "grid-column-start: 3; grid-row-start: 2;",
            _ => "",
        },
        _ => "",
    }
}

/// Card bound to the current session
#[component]
pub fn CardPreview() -> Element {
    let session = use_session();
    let config = session.read().config().clone();

    rsx! {
        Card { config }
    }
}

/// Rendered greeting card
#[component]
pub fn Card(config: CardConfig) -> Element {
    let view = CardView::from_config(&config);
    let has_background = view.background != BackgroundLayout::None;

    let mut frame_class = String::from("card-frame");
    if view.framed {
        frame_class.push_str(" framed");
    }
    if has_background {
        frame_class.push_str(" over-background");
    }
    let frame_border = if view.framed {
        view.border_color.to_string()
    } else {
        "transparent".to_string()
    };
    let accent = view.border_color.to_string();

    rsx! {
        div {
            class: "card",
            style: "font-family: {view.font_family};",
            Background { images: config.background_images.clone(), layout: view.background }
            div {
                class: "{frame_class}",
                style: "border-color: {frame_border};",
                if let Some(ornament) = view.corner {
                    for (position, mirror) in CORNERS {
                        CornerDecoration {
                            key: "{position}",
                            ornament,
                            position,
                            mirror,
                            color: accent.clone(),
                        }
                    }
                }
                h1 {
                    class: "card-title",
                    style: "color: {view.heading_color};",
                    "{view.title}"
                }
                div { class: "card-centerpiece",
                    CenterpieceView { kind: view.centerpiece, accent: view.border_color }
                }
                p {
                    class: "card-message",
                    style: "color: {view.message_color};",
                    "{config.message}"
                }
                div { class: "card-closing",
                    p {
                        class: "card-signature",
                        style: "color: {view.signature_color};",
                        "{config.signature}"
                    }
                    p {
                        class: "card-name",
                        style: "color: {view.name_color};",
                        "{config.name}"
                    }
                }
            }
        }
    }
}

#[component]
fn Background(images: Vec<CardImage>, layout: BackgroundLayout) -> Element {
    match layout {
        BackgroundLayout::None => rsx! {},
        BackgroundLayout::Single => {
            let uri = images.first().map(CardImage::as_data_uri).unwrap_or_default();
            rsx! {
                div {
                    class: "card-background single",
                    style: "background-image: url({uri});",
                    div { class: "background-wash" }
                }
            }
        }
        BackgroundLayout::Collage { columns, rows, .. } => rsx! {
            div {
                class: "card-background collage",
                style: "grid-template-columns: repeat({columns}, 1fr); grid-template-rows: repeat({rows}, 1fr);",
                for (index, image) in images.iter().enumerate() {
                    {
                        let style = format!(
                            "background-image: url({}); {}",
                            image.as_data_uri(),
                            collage_cell_style(layout, index)
                        );
                        rsx! {
                            div { key: "{index}", class: "collage-cell", style }
                        }
                    }
                }
                div { class: "background-wash" }
            }
        },
    }
}

#[component]
fn CornerDecoration(
    ornament: CornerOrnament,
    position: &'static str,
    mirror: &'static str,
    color: String,
) -> Element {
    match ornament {
        CornerOrnament::Star => rsx! {
            div {
                class: "corner star {position}",
                style: "color: {color};",
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    fill: "none",
                    view_box: "0 0 24 24",
                    stroke_width: "1.5",
                    stroke: "currentColor",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        d: STAR_PATH,
                    }
                }
            }
        },
        CornerOrnament::Floral => rsx! {
            div {
                class: "corner floral {position}",
                style: "color: {color}; transform: {mirror};",
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    view_box: "0 0 100 100",
                    fill: "currentColor",
                    for angle in [45, 135, 225, 315] {
                        path {
                            key: "{angle}",
                            d: PETAL_PATH,
                            transform: "rotate({angle} 50 20)",
                        }
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_image_collage_stacks_two_beside_the_tall_one() {
        let layout = BackgroundLayout::for_count(3);
        assert_eq!(collage_cell_style(layout, 0), "grid-row: span 2;");
        assert_eq!(collage_cell_style(layout, 1), "grid-column-start: 2;");
        assert_eq!(
            collage_cell_style(layout, 2),
            "grid-column-start: 2; grid-row-start: 2;"
        );
    }

    #[test]
    fn five_image_collage_fills_the_bottom_row() {
        let layout = BackgroundLayout::for_count(5);
        assert_eq!(collage_cell_style(layout, 0), "grid-row: span 2;");
        assert_eq!(collage_cell_style(layout, 1), "");
        assert_eq!(collage_cell_style(layout, 2), "");
        assert_eq!(
            collage_cell_style(layout, 3),
            "grid-column-start: 2; grid-row-start: 2;"
        );
        assert_eq!(
            collage_cell_style(layout, 4),
            "grid-column-start: 3; grid-row-start: 2;"
        );
    }

    #[test]
    fn even_collages_need_no_placement() {
        for count in [2, 4] {
            let layout = BackgroundLayout::for_count(count);
            for index in 0..count {
                assert_eq!(collage_cell_style(layout, index), "");
            }
        }
    }
}
