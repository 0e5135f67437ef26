use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::charts::{self, ChartLabels};
use crate::ui::{metrics, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GymDashboardApp {
    pub state: AppState,
}

impl GymDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for GymDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, charts, raw data ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| dashboard(ui, &self.state));
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    let summary = &state.summary;
    let colors = &state.colors;

    ui.heading("🛠 Dashboard da Análise das Atividades de Treinamento");
    ui.label("Veja pelos gráficos os principais dados das atividades de treinamento desta academia.");
    ui.add_space(8.0);

    ui.heading("📊 Métricas gerais da Academia");
    metrics::metrics_row(ui, &summary.metrics);

    ui.separator();
    ui.heading("📈 Gráficos");

    ui.columns(2, |cols: &mut [Ui]| {
        charts::bar_chart(
            &mut cols[0],
            "chart_gender",
            &ChartLabels {
                title: "Distribuição de pessoas por gênero",
                x_axis: "Gênero",
                y_axis: "Quantidade de pessoas",
            },
            &summary.by_gender,
            &colors.gender,
        );
        charts::bar_chart(
            &mut cols[1],
            "chart_age",
            &ChartLabels {
                title: "Distribuição etária",
                x_axis: "Idade",
                y_axis: "Quantidade de pessoas",
            },
            &summary.by_age,
            &colors.age,
        );
    });
    ui.add_space(8.0);

    ui.columns(2, |cols: &mut [Ui]| {
        charts::pie_chart(
            &mut cols[0],
            "Proporção dos tipos de inscrição",
            &summary.by_subscription,
            &colors.subscription,
        );
        charts::pie_chart(
            &mut cols[1],
            "Distribuição de Check-ins por Período do Dia",
            &summary.by_period,
            &colors.period,
        );
    });
    ui.add_space(8.0);

    charts::bar_chart(
        ui,
        "chart_training",
        &ChartLabels {
            title: "Distribuição de Treinos",
            x_axis: "Tipo de treino",
            y_axis: "Quantidade de pessoas",
        },
        &summary.by_training,
        &colors.training,
    );

    ui.separator();
    ui.heading("ℹ Dados da Academia");
    table::raw_data_table(ui, &state.dataset);
}
