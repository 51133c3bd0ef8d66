use crate::allocation::{allocate, AllocationSummary, PurchaseLot, DEFAULT_INVESTMENT_TEXT};
use crate::br_number::parse_br_number;
use crate::company::{render_execution_date, Column, Company};
use crate::live_input::{
    format_input_live, FieldRegistry, FormatOutcome, MIN_VOLUME_INPUT, TOTAL_INVESTMENT_INPUT,
};
use crate::loader;
use crate::ranking::{rank_companies, RankingParams, DEFAULT_MIN_VOLUME_TEXT, MAX_TOP_N, MIN_TOP_N};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Ranking,
    Columns,
    Help,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Ranking => Page::Columns,
            Page::Columns => Page::Help,
            Page::Help => Page::Ranking,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Ranking => Page::Help,
            Page::Columns => Page::Ranking,
            Page::Help => Page::Columns,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Ranking => "Ranking",
            Page::Columns => "Colunas",
            Page::Help => "Métricas",
        }
    }
}

/// Which widget keystrokes are routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    MinVolume,
    Investment,
}

/// One editable numeric field of the settings panel.
pub struct InputField {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl InputField {
    fn new(id: &'static str, label: &'static str, seed: &str) -> Self {
        InputField {
            id,
            label,
            value: seed.to_string(),
        }
    }
}

pub struct App {
    pub companies: Vec<Company>,
    pub ranked: Vec<Company>,
    pub state: TableState,
    pub current_page: Page,
    pub sidebar_open: bool,
    pub focus: Focus,
    pub min_volume_input: InputField,
    pub investment_input: InputField,
    pub purchase_lot: PurchaseLot,
    pub top_n: usize,
    pub columns: Vec<(Column, bool)>,
    pub columns_state: TableState,
    pub execution_date: Option<NaiveDate>,
}

impl App {
    pub fn new(companies: Vec<Company>) -> Self {
        let execution_date = loader::execution_date(&companies);

        let columns: Vec<(Column, bool)> = Column::ALL
            .iter()
            .map(|c| (*c, c.default_visible()))
            .collect();

        let mut columns_state = TableState::default();
        columns_state.select(Some(0));

        let mut app = App {
            companies,
            ranked: Vec::new(),
            state: TableState::default(),
            current_page: Page::Ranking,
            sidebar_open: true,
            focus: Focus::Table,
            min_volume_input: InputField::new(
                MIN_VOLUME_INPUT,
                "Volume Médio 2M Mínimo (R$):",
                DEFAULT_MIN_VOLUME_TEXT,
            ),
            investment_input: InputField::new(
                TOTAL_INVESTMENT_INPUT,
                "Valor a Investir (R$):",
                DEFAULT_INVESTMENT_TEXT,
            ),
            purchase_lot: PurchaseLot::Fractional,
            top_n: RankingParams::default().top_n,
            columns,
            columns_state,
            execution_date,
        };
        app.recompute_ranking();
        app
    }

    /// Re-filter and re-sort from the full dataset, then re-allocate.
    /// A fresh ranking starts with every listed company selected.
    pub fn recompute_ranking(&mut self) {
        let params = RankingParams {
            top_n: self.top_n,
            min_volume: parse_br_number(&self.min_volume_input.value).unwrap_or(0.0),
        };
        self.ranked = rank_companies(&self.companies, &params);
        self.recompute_allocation();

        // Clamp the cursor to the new list
        match self.state.selected() {
            Some(i) if i < self.ranked.len() => {}
            _ if !self.ranked.is_empty() => self.state.select(Some(0)),
            _ => self.state.select(None),
        }
    }

    pub fn recompute_allocation(&mut self) {
        let total = parse_br_number(&self.investment_input.value).unwrap_or(0.0);
        allocate(&mut self.ranked, total, self.purchase_lot);
    }

    pub fn summary(&self) -> AllocationSummary {
        let total = parse_br_number(&self.investment_input.value).unwrap_or(0.0);
        AllocationSummary::compute(&self.ranked, total)
    }

    pub fn toggle_selected(&mut self) {
        if let Some(i) = self.state.selected() {
            if let Some(company) = self.ranked.get_mut(i) {
                company.selected_for_allocation = !company.selected_for_allocation;
                self.recompute_allocation();
            }
        }
    }

    pub fn toggle_column(&mut self) {
        if let Some(i) = self.columns_state.selected() {
            if let Some((column, visible)) = self.columns.get_mut(i) {
                if !column.pinned() {
                    *visible = !*visible;
                }
            }
        }
    }

    pub fn visible_columns(&self) -> Vec<Column> {
        self.columns
            .iter()
            .filter(|(column, visible)| *visible || column.pinned())
            .map(|(column, _)| *column)
            .collect()
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        // Fields left the view: stop routing keystrokes at them
        if !self.sidebar_open {
            self.focus = Focus::Table;
        }
    }

    pub fn toggle_lot(&mut self) {
        self.purchase_lot = self.purchase_lot.toggle();
        self.recompute_allocation();
    }

    pub fn adjust_top_n(&mut self, delta: isize) {
        let adjusted = self.top_n.saturating_add_signed(delta);
        self.top_n = adjusted.clamp(MIN_TOP_N, MAX_TOP_N);
        self.recompute_ranking();
    }

    /// Route one keystroke into the focused field, then run the live
    /// formatter over the buffer. On `Update` the buffer is replaced; on
    /// `NoUpdate` it is left exactly as typed.
    pub fn edit_focused_field(&mut self, code: KeyCode) {
        let refilter = self.focus == Focus::MinVolume;
        {
            let field = match self.focus {
                Focus::MinVolume => &mut self.min_volume_input,
                Focus::Investment => &mut self.investment_input,
                Focus::Table => return,
            };
            match code {
                KeyCode::Char(c) => field.value.push(c),
                KeyCode::Backspace => {
                    field.value.pop();
                }
                _ => return,
            }
        }

        self.reformat_focused_field();

        if refilter {
            self.recompute_ranking();
        } else {
            self.recompute_allocation();
        }
    }

    fn reformat_focused_field(&mut self) {
        let (field_id, raw) = match self.focus {
            Focus::MinVolume => (self.min_volume_input.id, self.min_volume_input.value.clone()),
            Focus::Investment => (
                self.investment_input.id,
                self.investment_input.value.clone(),
            ),
            Focus::Table => return,
        };

        if let FormatOutcome::Update(text) = format_input_live(self, field_id, &raw) {
            match self.focus {
                Focus::MinVolume => self.min_volume_input.value = text,
                Focus::Investment => self.investment_input.value = text,
                Focus::Table => {}
            }
        }
    }

    pub fn next(&mut self) {
        let len = self.ranked.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.ranked.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn columns_next(&mut self) {
        let len = self.columns.len();
        let i = match self.columns_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.columns_state.select(Some(i));
    }

    pub fn columns_previous(&mut self) {
        let len = self.columns.len();
        let i = match self.columns_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.columns_state.select(Some(i));
    }
}

/// The live formatter asks the dashboard whether a field is on screen before
/// rewriting it: a collapsed settings panel takes its fields out of view.
impl FieldRegistry for App {
    fn field_exists(&self, field_id: &str) -> bool {
        self.sidebar_open
            && (field_id == self.min_volume_input.id || field_id == self.investment_input.id)
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // While a field is focused, keystrokes belong to it
            if app.focus != Focus::Table {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter => app.focus = Focus::Table,
                    KeyCode::Tab => {
                        app.focus = match app.focus {
                            Focus::MinVolume => Focus::Investment,
                            _ => Focus::MinVolume,
                        };
                    }
                    code => app.edit_focused_field(code),
                }
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Tab => app.current_page = app.current_page.next(),
                KeyCode::BackTab => app.current_page = app.current_page.previous(),
                KeyCode::Char('s') => app.toggle_sidebar(),
                KeyCode::Char('m') if app.sidebar_open => app.focus = Focus::MinVolume,
                KeyCode::Char('v') if app.sidebar_open => app.focus = Focus::Investment,
                KeyCode::Char('l') => app.toggle_lot(),
                KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_top_n(1),
                KeyCode::Char('-') => app.adjust_top_n(-1),
                KeyCode::Char(' ') => match app.current_page {
                    Page::Ranking => app.toggle_selected(),
                    Page::Columns => app.toggle_column(),
                    Page::Help => {}
                },
                KeyCode::Down | KeyCode::Char('j') => match app.current_page {
                    Page::Columns => app.columns_next(),
                    _ => app.next(),
                },
                KeyCode::Up | KeyCode::Char('k') => match app.current_page {
                    Page::Columns => app.columns_previous(),
                    _ => app.previous(),
                },
                KeyCode::Home => app.state.select(Some(0)),
                KeyCode::End => {
                    if !app.ranked.is_empty() {
                        app.state.select(Some(app.ranked.len() - 1));
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header with title and navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Ranking => render_ranking_page(f, chunks[1], app),
        Page::Columns => render_columns_page(f, chunks[1], app),
        Page::Help => render_help_page(f, chunks[1]),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title_line = Line::from(vec![
        Span::styled(
            "A FÓRMULA MÁGICA",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" de JOEL GREENBLATT  |  "),
        Span::styled(
            format!(
                "Dados atualizados em: {}",
                render_execution_date(app.execution_date)
            ),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  |  Fonte: Fundamentus"),
    ]);

    let pages = [Page::Ranking, Page::Columns, Page::Help];
    let mut tab_spans = vec![];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Empresas no ranking: {}", app.ranked.len()),
        Style::default().fg(Color::White),
    ));

    let header = Paragraph::new(vec![title_line, Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    f.render_widget(header, area);
}

fn render_ranking_page(f: &mut Frame, area: Rect, app: &mut App) {
    let content_area = if app.sidebar_open {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(38), // Settings sidebar
                Constraint::Min(0),     // Table + summary
            ])
            .split(area);

        render_sidebar(f, chunks[0], app);
        chunks[1]
    } else {
        area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Ranking table
            Constraint::Length(7), // Allocation summary
        ])
        .split(content_area);

    render_table(f, chunks[0], app);
    render_summary(f, chunks[1], app);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let field_line = |field: &InputField, focused: bool| {
        let style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let cursor = if focused { "▌" } else { "" };
        Line::from(Span::styled(format!("  {}{}", field.value, cursor), style))
    };

    let lines = vec![
        Line::from(Span::styled(
            "Configurações do Ranking",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::raw(app.min_volume_input.label)),
        field_line(&app.min_volume_input, app.focus == Focus::MinVolume),
        Line::from(""),
        Line::from(Span::raw(format!(
            "Empresas a exibir: {}  (+/-)",
            app.top_n
        ))),
        Line::from(""),
        Line::from(Span::styled(
            "Configurações de Investimento",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::raw(app.investment_input.label)),
        field_line(&app.investment_input, app.focus == Focus::Investment),
        Line::from(""),
        Line::from(Span::raw("Tipo de Lote de Compra (l):")),
        Line::from(Span::styled(
            format!("  {}", app.purchase_lot.label()),
            Style::default().fg(Color::Cyan),
        )),
    ];

    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Configurações "),
    );

    f.render_widget(sidebar, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let columns = app.visible_columns();

    let mut header_cells = vec![
        Cell::from("Nº").style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::from("Sel").style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    header_cells.extend(columns.iter().map(|c| {
        Cell::from(c.label()).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.ranked.iter().enumerate().map(|(i, company)| {
        let marker = if company.selected_for_allocation {
            "[x]"
        } else {
            "[ ]"
        };
        let row_style = if company.selected_for_allocation {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut cells = vec![
            Cell::from(format!("{}", i + 1)),
            Cell::from(marker).style(Style::default().fg(Color::Green)),
        ];
        cells.extend(columns.iter().map(|c| Cell::from(c.render(company))));

        Row::new(cells).style(row_style).height(1)
    });

    let mut constraints = vec![Constraint::Length(3), Constraint::Length(4)];
    constraints.extend(columns.iter().map(column_constraint));

    let table = Table::new(rows, constraints)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Ranking e Alocação de Investimento "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn column_constraint(column: &Column) -> Constraint {
    let width = match column {
        Column::Ticker => 8,
        Column::Empresa => 18,
        Column::Setor | Column::Subsetor => 15,
        Column::Roic | Column::EarningsYield => 9,
        Column::RankRoic => 9,
        Column::RankEy | Column::MagicFormulaRank => 7,
        Column::Cotacao => 13,
        Column::VolMed2m => 18,
        Column::Pl | Column::Pvp => 8,
        Column::DivYield => 13,
        Column::Lpa => 11,
        Column::Ret30Dias | Column::Ret12Meses => 11,
        Column::MargLiquida => 18,
        Column::ValorAlocado => 18,
        Column::QtdAcoes => 10,
        Column::PesoCarteira => 13,
    };
    Constraint::Length(width)
}

fn render_summary(f: &mut Frame, area: Rect, app: &App) {
    let summary = app.summary();
    let lines: Vec<Line> = summary.lines().into_iter().map(Line::from).collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Resumo da Alocação de Investimento "),
    );

    f.render_widget(panel, area);
}

fn render_columns_page(f: &mut Frame, area: Rect, app: &mut App) {
    let header = Row::new([
        Cell::from("Exibir").style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::from("Coluna").style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .style(Style::default().bg(Color::DarkGray))
    .height(1);

    let rows = app.columns.iter().map(|(column, visible)| {
        let marker = if column.pinned() {
            "(fixa)"
        } else if *visible {
            "[x]"
        } else {
            "[ ]"
        };

        Row::new([Cell::from(marker), Cell::from(column.label())]).height(1)
    });

    let table = Table::new(rows, [Constraint::Length(8), Constraint::Min(20)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Colunas a Exibir "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.columns_state);
}

fn render_help_page(f: &mut Frame, area: Rect) {
    let entries = [
        (
            "ROIC",
            "retorno sobre o capital investido; quanto maior, melhor.",
        ),
        (
            "EY",
            "inverso do P/L (lucro por ação / preço); quanto maior, mais barata a empresa.",
        ),
        (
            "Rank MF",
            "soma dos rankings de ROIC e EY; menor soma = melhor pela Fórmula Mágica.",
        ),
        ("Cotação (R$)", "preço da ação no fechamento anterior."),
        (
            "Vol. Médio 2M (R$)",
            "volume médio negociado nos últimos 2 meses; mede liquidez.",
        ),
        ("P/L", "anos de lucro necessários para pagar o preço da ação."),
        ("P/VP", "preço sobre o valor patrimonial por ação."),
        (
            "Div. Yield (%)",
            "dividendos pagos em relação ao preço da ação.",
        ),
        ("LPA (R$)", "lucro líquido dividido pelo número de ações."),
        (
            "Valor Alocado (R$)",
            "valor real alocado, dado a cotação e a quantidade comprada.",
        ),
        (
            "Qtd. Ações",
            "ações a comprar, arredondadas para a unidade ou lote.",
        ),
        (
            "% na Carteira",
            "peso percentual real da empresa na carteira.",
        ),
    ];

    let mut lines = vec![Line::from(Span::styled(
        "Entendendo as Métricas",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(""));
    for (metric, explanation) in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{metric}: "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(explanation),
        ]));
    }

    let help = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Entendendo as Métricas "),
    );

    f.render_widget(help, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![];

    if app.focus != Focus::Table {
        let field = match app.focus {
            Focus::MinVolume => "Volume Mínimo",
            Focus::Investment => "Valor a Investir",
            Focus::Table => "",
        };
        status_spans.push(Span::styled(
            format!(" Editando: {field} "),
            Style::default().fg(Color::Yellow),
        ));
        status_spans.push(Span::raw("| "));
        status_spans.push(Span::styled(
            "Enter/Esc",
            Style::default().fg(Color::Yellow),
        ));
        status_spans.push(Span::raw(" concluir | "));
        status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" outro campo"));
    } else {
        let selected = app.state.selected().map(|i| i + 1).unwrap_or(0);
        status_spans.push(Span::styled(
            format!(" Linha: {}/{} ", selected, app.ranked.len()),
            Style::default().fg(Color::Cyan),
        ));
        status_spans.push(Span::raw("| "));
        status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" Página | "));
        status_spans.push(Span::styled("s", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" Painel | "));
        status_spans.push(Span::styled("m/v", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" Editar | "));
        status_spans.push(Span::styled("l", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" Lote | "));
        status_spans.push(Span::styled("Espaço", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" Seleção | "));
        status_spans.push(Span::styled("q", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" Sair"));
    }

    let status = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    f.render_widget(status, area);
}

// ============================================================================
// TESTS
// ============================================================================
