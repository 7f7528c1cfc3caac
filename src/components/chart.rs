use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid},
    element::{AxisType, ItemStyle, LineStyle, LineStyleType, SplitLine},
    renderer::WasmRenderer,
    series::Scatter,
};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::config::Config;
use crate::models::plot::{Mark, PlotPoint, marks};

const CHART_ID: &str = "es-graph";
const MARK_COLOR: &str = "#12939a";

#[derive(Properties, PartialEq)]
pub struct ScatterChartProps {
    pub points: Rc<Vec<PlotPoint>>,
}

/// Fixed-size scatter plot, one mark per point.
#[function_component(ScatterChart)]
pub fn scatter_chart(props: &ScatterChartProps) -> Html {
    let chart_marks = use_memo(props.points.clone(), |points| marks(points));

    use_effect_with(chart_marks, |chart_marks| {
        render_chart(chart_marks);
        || ()
    });

    let side = format!("{}px", Config::CHART_SIDE_PX);
    html! {
        <div class="graph">
            <div id={CHART_ID} style={format!("width: {side}; height: {side};")} />
        </div>
    }
}

fn render_chart(marks: &[Mark]) {
    let chart = build_chart(marks);
    if let Err(e) =
        WasmRenderer::new(Config::CHART_SIDE_PX, Config::CHART_SIDE_PX).render(CHART_ID, &chart)
    {
        web_sys::console::error_1(&JsValue::from_str(&format!("Render error: {e:?}")));
    }
}

pub fn build_chart(marks: &[Mark]) -> CharmingChart {
    let split_line = || {
        SplitLine::new().line_style(
            LineStyle::new()
                .color("#e5e7eb")
                .type_(LineStyleType::Dashed),
        )
    };

    // Each point is its own series so it can carry its own symbol size.
    marks.iter().fold(
        CharmingChart::new()
            .grid(Grid::new().left("10%").right("6%").top("6%").bottom("10%"))
            .x_axis(Axis::new().type_(AxisType::Value).split_line(split_line()))
            .y_axis(Axis::new().type_(AxisType::Value).split_line(split_line())),
        |chart, mark| {
            chart.series(
                Scatter::new()
                    .symbol_size(mark.diameter)
                    .item_style(ItemStyle::new().color(MARK_COLOR))
                    .data(vec![mark.position.to_vec()]),
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plot::initial_points;

    fn series_of(chart: &CharmingChart) -> Vec<serde_json::Value> {
        let value = serde_json::to_value(chart).unwrap();
        value
            .get("series")
            .and_then(|s| s.as_array())
            .cloned()
            .unwrap_or_default()
    }

    #[test]
    fn test_one_series_per_point() {
        let chart = build_chart(&marks(&initial_points()));
        let series = series_of(&chart);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0]["symbolSize"].as_f64(), Some(10.0));
        assert_eq!(series[1]["symbolSize"].as_f64(), Some(4.0));
    }

    #[test]
    fn test_empty_chart_has_no_series() {
        let chart = build_chart(&[]);
        assert!(series_of(&chart).is_empty());
    }
}
