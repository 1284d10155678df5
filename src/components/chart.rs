use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::monthly::BarSeries;
use crate::utils::debounce::debounced_resize_listener;

const RESIZE_DEBOUNCE_MS: u32 = 150;

#[derive(Properties, PartialEq, Clone)]
pub struct MonthlyChartProps {
    /// DOM id the renderer mounts into; must be unique per chart on a page.
    pub id: AttrValue,
    pub title: AttrValue,
    /// Y-axis caption, e.g. the unit of the plotted means.
    pub y_label: AttrValue,
    /// X-axis labels, one `"yyyy-MM"` key per bucket.
    pub months: Vec<String>,
    pub series: Vec<BarSeries>,
    pub dark_mode: bool,
}

/// Grouped bar chart of monthly means, one bar group per month and one bar
/// per metric. Re-renders on window resize at the container's current size.
#[function_component(MonthlyChart)]
pub fn monthly_chart(props: &MonthlyChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.clone(), container_ref),
            |(props, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, props);

                    let props = props.clone();
                    debounced_resize_listener(
                        move || render_chart(&container, &props),
                        RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.id.clone()} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, props: &MonthlyChartProps) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(props);
    if let Err(e) = WasmRenderer::new(width, height).render(&props.id, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(props: &MonthlyChartProps) -> CharmingChart {
    // Theme-aware colors
    let (title_color, axis_color, grid_color) = if props.dark_mode {
        ("#e4e4e7", "#a1a1aa", "#404040")
    } else {
        ("#1f2937", "#6b7280", "#e5e7eb")
    };

    let mut chart = CharmingChart::new()
        .title(
            Title::new()
                .text(props.title.as_str())
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new().bottom("0"))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Mês")
                .data(props.months.clone())
                .axis_label(AxisLabel::new().color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(props.y_label.as_str())
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    for series in &props.series {
        chart = chart.series(
            Bar::new()
                .name(series.label)
                .data(series.values.clone())
                .item_style(ItemStyle::new().color(series.color)),
        );
    }

    chart
}
