use anyhow::{Context, Result, bail};
use spiral_config::{Page, SpiralConfig};
use spiral_core::{
    AffineMatrix, Color, DisplayList, FieldParams, Painter, Rect, RoundedRect, Stroke, Viewport,
    generate_field, svg,
};
use std::path::PathBuf;

/// Margin around the drawing, in viewport units.
const PADDING: f64 = 20.0;

fn arg_value(name: &str) -> Option<String> {
    let prefix = format!("--{name}=");
    std::env::args().find_map(|a| a.strip_prefix(&prefix).map(|s| s.to_string()))
}

fn load_config() -> Result<SpiralConfig> {
    let mut config = match arg_value("config") {
        Some(path) => SpiralConfig::load_from_file(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => SpiralConfig::load_or_default(),
    };
    config.merge_with_env();

    if let Some(page) = arg_value("page") {
        match Page::parse(&page) {
            Some(page) => config.output.page = page,
            None => bail!("unknown page {page:?} (expected field, inner or basic)"),
        }
    }
    if let Some(out) = arg_value("out") {
        config.output.path = Some(PathBuf::from(out));
    }
    Ok(config)
}

fn paint_background(painter: &mut Painter, viewport: Viewport, background: Option<Color>) {
    if let Some(color) = background {
        painter.fill_rect(
            Rect {
                x: 0.0,
                y: 0.0,
                w: viewport.width,
                h: viewport.height,
            },
            color,
        );
    }
}

fn build_field(config: &SpiralConfig, params: FieldParams) -> Result<DisplayList> {
    let field = generate_field(&params)?;
    let (w, h) = field.size();
    let viewport = Viewport {
        width: w + 2.0 * PADDING,
        height: h + 2.0 * PADDING,
    };
    log::info!(
        "field: {}x{} spirals, {} squares each, inner rotation {}%",
        params.rows,
        params.columns,
        params.spiral.steps,
        config.spiral.inner_rotation_percentage
    );

    let mut painter = Painter::begin_frame(viewport);
    paint_background(&mut painter, viewport, config.background()?);
    field.paint(&mut painter, viewport);
    Ok(painter.finish())
}

fn build_basic(config: &SpiralConfig) -> Result<DisplayList> {
    let edge = config.basic.edge_length;
    let transform = config.basic_transform().to_matrix();
    log::info!("basic transformation matrix:\n{transform}");

    // Large enough for the slider ranges of the original page: +-100 offsets, 3x scale.
    let extent = edge * 3.0 + 200.0;
    let viewport = Viewport {
        width: extent * 2.0,
        height: extent * 2.0,
    };
    let rrect = RoundedRect {
        rect: Rect::square(edge),
        radius: 0.0,
    };

    let mut painter = Painter::begin_frame(viewport);
    paint_background(&mut painter, viewport, config.background()?);
    painter.push_transform(AffineMatrix::translation(
        extent - edge / 2.0,
        extent - edge / 2.0,
    ));
    painter.stroke_rounded_rect(rrect, Stroke { width: 5.0 }, Color::gray(), AffineMatrix::identity());
    painter.stroke_rounded_rect(rrect, Stroke { width: 5.0 }, Color::orange(), transform);
    painter.pop_transform();
    Ok(painter.finish())
}

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config()?;
    let page = config.output.page;
    log::info!("rendering page {:?}", page);

    let list = match page {
        Page::Field => build_field(&config, config.field_params()?)?,
        Page::Inner => {
            let spiral = config.spiral_params()?;
            let step = spiral_core::inner_rotation(spiral.offset_ratio, spiral.edge_length);
            log::info!("inner rotation transformation:\n{step}");
            build_field(&config, FieldParams::single(spiral))?
        }
        Page::Basic => build_basic(&config)?,
    };

    let document = svg::to_svg_string(&list);
    match &config.output.path {
        Some(path) => {
            std::fs::write(path, document)
                .with_context(|| format!("writing SVG to {}", path.display()))?;
            log::info!("wrote {} commands to {}", list.commands.len(), path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}
