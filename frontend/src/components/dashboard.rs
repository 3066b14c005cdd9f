//! Dashboard page: three static charts drawn as inline SVG.

use yew::{html, Component, Context, Html};

use common::dashboard::{
    bar_layout, pie_slices, Chart, ChartKind, COURSE_STATUS_DISTRIBUTION,
    COURSE_TYPE_DISTRIBUTION, MONTHLY_PARTICIPATION,
};

const PLOT_WIDTH: f64 = 360.0;
const PLOT_HEIGHT: f64 = 200.0;
const PIE_RADIUS: f64 = 90.0;

pub struct Dashboard;

impl Component for Dashboard {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="screen">
                <h2 class="screen-title">{ "Dashboard" }</h2>
                <div class="chart-grid">
                    { chart_card(&MONTHLY_PARTICIPATION) }
                    { chart_card(&COURSE_TYPE_DISTRIBUTION) }
                    { chart_card(&COURSE_STATUS_DISTRIBUTION) }
                </div>
            </div>
        }
    }
}

fn chart_card(chart: &Chart) -> Html {
    let body = match chart.kind {
        ChartKind::Bar => bar_chart(chart),
        ChartKind::Pie => pie_chart(chart),
    };
    html! {
        <div class="card chart-card">
            <h3 class="card-title">{ chart.title }</h3>
            { body }
        </div>
    }
}

fn bar_chart(chart: &Chart) -> Html {
    let label_y = PLOT_HEIGHT + 16.0;
    html! {
        <svg class="chart" viewBox={format!("0 0 {} {}", PLOT_WIDTH, PLOT_HEIGHT + 24.0)}>
            <line class="axis" x1="0" y1={PLOT_HEIGHT.to_string()} x2={PLOT_WIDTH.to_string()} y2={PLOT_HEIGHT.to_string()} />
            { for bar_layout(chart, PLOT_WIDTH, PLOT_HEIGHT).into_iter().map(|bar| {
                let center = bar.x + bar.width / 2.0;
                html! {
                    <g>
                        <rect
                            x={bar.x.to_string()}
                            y={bar.y.to_string()}
                            width={bar.width.to_string()}
                            height={bar.height.to_string()}
                            fill={chart.color(0)}
                        >
                            <title>{ format!("{}: {}", bar.label, bar.value) }</title>
                        </rect>
                        <text x={center.to_string()} y={label_y.to_string()} text-anchor="middle">{ bar.label }</text>
                    </g>
                }
            }) }
        </svg>
    }
}

fn pie_chart(chart: &Chart) -> Html {
    let size = PIE_RADIUS * 2.0;
    html! {
        <div class="pie">
            <svg class="chart" viewBox={format!("0 0 {} {}", size, size)}>
                { for pie_slices(chart).into_iter().enumerate().map(|(index, slice)| html! {
                    <path d={slice.path(PIE_RADIUS, PIE_RADIUS, PIE_RADIUS)} fill={chart.color(index)}>
                        <title>{ format!("{}: {} ({:.0}%)", slice.label, slice.value, slice.share() * 100.0) }</title>
                    </path>
                }) }
            </svg>
            <ul class="legend">
                { for chart.points.iter().enumerate().map(|(index, point)| html! {
                    <li>
                        <span class="swatch" style={format!("background: {}", chart.color(index))}></span>
                        { format!("{} ({})", point.label, point.value) }
                    </li>
                }) }
            </ul>
        </div>
    }
}
