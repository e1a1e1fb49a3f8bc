use eframe::egui::{self, Align2, Color32};
use egui_plot::{Corner, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text};
use tracing_subscriber::EnvFilter;

use aero_charts::sweep::{self, DynamicPressureRun, Series, ThrustCurve};
use aero_charts::vehicle::presets;
use aero_charts::AeroError;

const PROFILE_COLORS: [Color32; 3] = [Color32::LIGHT_BLUE, Color32::GRAY, Color32::GREEN];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = ChartViz::new()?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native("Aero Charts", options, Box::new(|_| Ok(Box::new(app))))?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    DynamicPressure,
    Thrust,
}

struct ChartViz {
    tab: Tab,
    aircraft_name: String,
    runs: Vec<DynamicPressureRun>,
    curves: Vec<ThrustCurve>,
}

impl ChartViz {
    fn new() -> Result<Self, AeroError> {
        let aircraft = presets::a321();
        Ok(Self {
            tab: Tab::DynamicPressure,
            aircraft_name: aircraft.name.clone(),
            runs: sweep::run_profiles(&presets::ascent_profiles(), &presets::ascent_time())?,
            curves: sweep::thrust_curves(&aircraft, &presets::altitude_bands())?,
        })
    }

    fn dynamic_pressure_plot(&self, ui: &mut egui::Ui) {
        Plot::new("dynamic_pressure")
            .legend(Legend::default())
            .x_axis_label("Time (s)")
            .y_axis_label("Pressure (psf)")
            .include_x(0.0)
            .include_x(150.0)
            .show(ui, |plot_ui| {
                for (run, color) in self.runs.iter().zip(PROFILE_COLORS.iter().cycle()) {
                    // Peaks all fall inside the first 150 s.
                    let visible = run.series.samples.iter().take_while(|s| s.x <= 150.0);
                    let points: PlotPoints = visible.map(|s| [s.x, s.y]).collect();
                    plot_ui.line(Line::new(run.profile.name.as_str(), points).color(*color));

                    if let Some(m) = &run.max_q {
                        plot_ui.points(
                            Points::new(format!("max-q {}", run.profile.name), vec![[m.time, m.q]])
                                .shape(MarkerShape::Cross)
                                .radius(6.0)
                                .color(Color32::RED),
                        );
                        plot_ui.text(
                            Text::new(
                                format!("label {}", run.profile.name),
                                PlotPoint::new(m.time + 15.0, m.q + 15.0),
                                format!("{:.0} psf @ {} s", m.q, m.time),
                            )
                            .anchor(Align2::LEFT_BOTTOM)
                            .color(*color),
                        );
                    }
                }
            });
    }

    fn thrust_plots(&self, ui: &mut egui::Ui) {
        let height = ui.available_height() / self.curves.len().max(1) as f32 - 8.0;
        for curve in &self.curves {
            ui.label(format!("Thrust Required & Thrust Available — {} at {}", self.aircraft_name, curve.band.name));
            Plot::new(format!("thrust_{}", curve.band.name))
                .height(height)
                .legend(Legend::default().position(Corner::RightBottom))
                .x_axis_label("Velocity (kts)")
                .y_axis_label("Thrust (lb)")
                .include_x(50.0)
                .include_x(1550.0)
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(format!("T_R at {}", curve.band.name), to_points(&curve.required))
                            .color(Color32::WHITE),
                    );
                    plot_ui.line(
                        Line::new(
                            format!("T_A at {} ({:.0} lb)", curve.band.name, curve.available),
                            to_points(&curve.available_series()),
                        )
                        .color(Color32::WHITE)
                        .style(LineStyle::Dashed { length: 10.0 }),
                    );
                    if let Some(marker) = &curve.band.marker {
                        let (lo, hi) = marker.thrust_range;
                        plot_ui.line(
                            Line::new(
                                format!("{} ({:.0} knots)", marker.label, marker.speed_kt),
                                vec![[marker.speed_kt, lo], [marker.speed_kt, hi]],
                            )
                            .color(Color32::LIGHT_BLUE)
                            .style(LineStyle::Dotted { spacing: 6.0 }),
                        );
                    }
                });
        }
    }
}

fn to_points(series: &Series) -> PlotPoints<'static> {
    series.samples.iter().map(|s| [s.x, s.y]).collect()
}

impl eframe::App for ChartViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::DynamicPressure, "Dynamic pressure");
                ui.selectable_value(&mut self.tab, Tab::Thrust, "Thrust curves");
            });
            match self.tab {
                Tab::DynamicPressure => ui.heading("Dynamic pressure as a function of time"),
                Tab::Thrust => ui.heading(format!("Thrust Required & Thrust Available Curves for {}", self.aircraft_name)),
            };
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::DynamicPressure => self.dynamic_pressure_plot(ui),
            Tab::Thrust => self.thrust_plots(ui),
        });
    }
}
