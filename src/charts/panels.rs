use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::buckets::{HourlyBucket, LatencyHistogram, PeriodCounts};
use crate::error::AppResult;

type Panel<'area, 'path> = &'area DrawingArea<BitMapBackend<'path>, Shift>;

const CAPTION_FONT: (&str, u32) = ("sans-serif", 22);
const HOUR_LABEL_FORMAT: &str = "%m/%d %H:%M";
const SUCCESS_RATE_CEILING: f64 = 105.0;
const SUCCESS_COLOR: RGBColor = RGBColor(46, 139, 87);
const FAILURE_COLOR: RGBColor = RGBColor(214, 39, 40);
const RATE_COLOR: RGBColor = RGBColor(31, 119, 180);
const LATENCY_COLOR: RGBColor = RGBColor(255, 127, 14);
const FILL_ALPHA: f64 = 0.7;
/// Width of one bar in the grouped bar panel, in category units.
const BAR_WIDTH: f64 = 0.35;

fn hour_axis_len(buckets: &[HourlyBucket]) -> u32 {
    u32::try_from(buckets.len()).unwrap_or(u32::MAX).max(1)
}

fn hour_label(buckets: &[HourlyBucket], idx: u32) -> String {
    usize::try_from(idx)
        .ok()
        .and_then(|idx| buckets.get(idx))
        .map_or_else(String::new, |bucket| {
            bucket.hour.format(HOUR_LABEL_FORMAT).to_string()
        })
}

fn hour_points<F>(buckets: &[HourlyBucket], value: F) -> Vec<(u32, f64)>
where
    F: Fn(&HourlyBucket) -> f64,
{
    (0u32..)
        .zip(buckets)
        .map(|(idx, bucket)| (idx, value(bucket)))
        .collect()
}

pub fn draw_success_rate(area: Panel<'_, '_>, buckets: &[HourlyBucket]) -> AppResult<()> {
    let label_of = |idx: &u32| hour_label(buckets, *idx);
    let mut chart = ChartBuilder::on(area)
        .caption("Success Rate Over Time", CAPTION_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0u32..hour_axis_len(buckets), 0f64..SUCCESS_RATE_CEILING)?;

    chart
        .configure_mesh()
        .x_label_formatter(&label_of)
        .x_labels(6)
        .y_desc("Success Rate (%)")
        .draw()?;

    chart.draw_series(
        LineSeries::new(hour_points(buckets, HourlyBucket::success_rate), RATE_COLOR)
            .point_size(3),
    )?;
    Ok(())
}

pub fn draw_latency_histogram(area: Panel<'_, '_>, histogram: &LatencyHistogram) -> AppResult<()> {
    let y_max = histogram.max_count().saturating_add(1);
    let mut chart = ChartBuilder::on(area)
        .caption("Response Time Distribution", CAPTION_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..histogram.upper(), 0u64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Response Time (ms)")
        .y_desc("Frequency")
        .draw()?;

    let series = [
        ("Success", &histogram.success, SUCCESS_COLOR),
        ("Failure", &histogram.failure, FAILURE_COLOR),
    ];
    for (label, counts, color) in series {
        chart
            .draw_series(histogram.bins().zip(counts.iter().copied()).map(
                |((left, right), count)| {
                    Rectangle::new([(left, 0), (right, count)], color.mix(FILL_ALPHA).filled())
                },
            ))?
            .label(label)
            .legend(move |(x, y)| {
                Rectangle::new(
                    [
                        (x, y.saturating_sub(5)),
                        (x.saturating_add(12), y.saturating_add(5)),
                    ],
                    color.mix(FILL_ALPHA).filled(),
                )
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    Ok(())
}

pub fn draw_average_latency(area: Panel<'_, '_>, buckets: &[HourlyBucket]) -> AppResult<()> {
    let points = hour_points(buckets, HourlyBucket::average_latency);
    let y_max = points
        .iter()
        .map(|(_, value)| *value)
        .fold(0.0, f64::max)
        .max(1.0)
        * 1.1;
    let label_of = |idx: &u32| hour_label(buckets, *idx);

    let mut chart = ChartBuilder::on(area)
        .caption("Average Response Time Over Time", CAPTION_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0u32..hour_axis_len(buckets), 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_label_formatter(&label_of)
        .x_labels(6)
        .y_desc("Response Time (ms)")
        .draw()?;

    chart.draw_series(LineSeries::new(points, LATENCY_COLOR).point_size(3))?;
    Ok(())
}

pub fn draw_period_counts(area: Panel<'_, '_>, periods: &[PeriodCounts]) -> AppResult<()> {
    let y_top = periods
        .iter()
        .map(|period| period.success.max(period.failure))
        .max()
        .unwrap_or(0);
    let y_max = y_top.saturating_add(y_top / 10).saturating_add(1);
    let x_max = periods.len() as f64 - 0.5;
    let label_of = |value: &f64| {
        let rounded = value.round();
        if (value - rounded).abs() > 0.01 || rounded < 0.0 {
            return String::new();
        }
        periods
            .get(rounded as usize)
            .map_or_else(String::new, |period| period.label.to_owned())
    };

    let mut chart = ChartBuilder::on(area)
        .caption("Request Counts by Time Period", CAPTION_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..x_max, 0u64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(periods.len())
        .x_label_formatter(&label_of)
        .x_desc("Time Period")
        .y_desc("Number of Requests")
        .draw()?;

    let value_style =
        TextStyle::from(("sans-serif", 14).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    let sides = [
        ("Success", -BAR_WIDTH, SUCCESS_COLOR),
        ("Failure", 0.0, FAILURE_COLOR),
    ];
    for (label, offset, color) in sides {
        let bars: Vec<(f64, u64)> = (0u32..)
            .zip(periods)
            .map(|(idx, period)| {
                let count = if offset < 0.0 {
                    period.success
                } else {
                    period.failure
                };
                (f64::from(idx) + offset, count)
            })
            .collect();

        chart
            .draw_series(bars.iter().map(|&(left, count)| {
                Rectangle::new(
                    [(left, 0), (left + BAR_WIDTH, count)],
                    color.mix(FILL_ALPHA).filled(),
                )
            }))?
            .label(label)
            .legend(move |(x, y)| {
                Rectangle::new(
                    [
                        (x, y.saturating_sub(5)),
                        (x.saturating_add(12), y.saturating_add(5)),
                    ],
                    color.mix(FILL_ALPHA).filled(),
                )
            });

        chart.draw_series(bars.iter().filter(|(_, count)| *count > 0).map(
            |&(left, count)| {
                Text::new(
                    count.to_string(),
                    (left + BAR_WIDTH / 2.0, count),
                    value_style.clone(),
                )
            },
        ))?;
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    Ok(())
}
