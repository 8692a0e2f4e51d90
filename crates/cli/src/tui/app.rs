use std::{io, path::PathBuf, sync::Arc};

use anyhow::Result;
use client::{SubmitError, SubmitOrchestrator};
use crossterm::{
  event::{Event as CrosstermEvent, EventStream, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dazzlo_core::{ColorScheme, Feature, FeatureId, Form, USER_FIELDS};
use futures::StreamExt;
use ratatui::{
  Terminal,
  backend::CrosstermBackend,
  buffer::Buffer,
  layout::{Constraint, Direction, Layout, Rect},
  style::Style,
  widgets::{Block, Borders, Clear, Widget},
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::tui::{
  event::{Action, key_to_action},
  theme::Theme,
  views::{
    DetailsView, FeaturesView, SectionsView,
    details::{DETAIL_ROW_COUNT, DetailRow, DetailsState},
    features::{FeatureField, FeaturesState, field_label, field_value, fields},
    sections::SectionsState,
    truncate, wrap,
  },
  widgets::PaletteSwatch,
};

/// The pane holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
  #[default]
  Details,
  Sections,
  Features,
}

impl Pane {
  fn next(self) -> Self {
    match self {
      Pane::Details => Pane::Sections,
      Pane::Sections => Pane::Features,
      Pane::Features => Pane::Details,
    }
  }

  fn prev(self) -> Self {
    match self {
      Pane::Details => Pane::Features,
      Pane::Sections => Pane::Details,
      Pane::Features => Pane::Sections,
    }
  }
}

/// Input mode for the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
  #[default]
  Normal,
  Editing,
}

/// What an in-progress edit will be written to
#[derive(Debug, Clone, PartialEq)]
pub enum EditTarget {
  UserField(&'static str),
  Content(String),
  Feature(FeatureId, FeatureField),
}

impl EditTarget {
  fn multiline(&self) -> bool {
    matches!(
      self,
      EditTarget::Content(_) | EditTarget::Feature(_, FeatureField::Code)
    )
  }
}

#[derive(Debug, Clone)]
pub struct Edit {
  pub target: EditTarget,
  pub label: String,
  pub buffer: String,
}

/// Modal message shown until dismissed
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
  pub title: String,
  pub message: String,
}

type SubmitResult = std::result::Result<PathBuf, SubmitError>;

/// Main application state
pub struct App {
  pub form: Form,
  pub focus: Pane,
  pub input_mode: InputMode,
  pub edit: Option<Edit>,
  pub should_quit: bool,
  pub show_help: bool,
  pub alert: Option<Alert>,
  pub status: Option<String>,

  // View states
  pub details: DetailsState,
  pub sections: SectionsState,
  pub features: FeaturesState,

  orchestrator: Arc<SubmitOrchestrator>,
  output_dir: PathBuf,
  submit_tx: mpsc::UnboundedSender<SubmitResult>,
  submit_rx: mpsc::UnboundedReceiver<SubmitResult>,
}

impl App {
  pub fn new(form: Form, orchestrator: Arc<SubmitOrchestrator>, output_dir: PathBuf) -> Self {
    let (submit_tx, submit_rx) = mpsc::unbounded_channel();
    Self {
      form,
      focus: Pane::Details,
      input_mode: InputMode::Normal,
      edit: None,
      should_quit: false,
      show_help: false,
      alert: None,
      status: None,
      details: DetailsState::new(),
      sections: SectionsState::new(),
      features: FeaturesState::new(),
      orchestrator,
      output_dir,
      submit_tx,
      submit_rx,
    }
  }

  fn selected_section_name(&self) -> Option<String> {
    self.form.sections().get(self.sections.selected).map(|s| s.name.clone())
  }

  fn selected_feature(&self) -> Option<&Feature> {
    self
      .form
      .sections()
      .get(self.sections.selected)?
      .features
      .get(self.features.selected)
  }

  fn clamp_features(&mut self) {
    let section = self.form.sections().get(self.sections.selected);
    self.features.clamp(section);
  }

  fn set_status(&mut self, status: impl Into<String>) {
    self.status = Some(status.into());
  }

  pub fn handle_action(&mut self, action: Action) {
    // An open alert swallows everything except dismissal and quit
    if self.alert.is_some() {
      match action {
        Action::Select | Action::Back | Action::Commit => self.alert = None,
        Action::Quit => self.should_quit = true,
        _ => {}
      }
      return;
    }

    if self.input_mode == InputMode::Editing {
      match action {
        Action::Input(c) => self.input_char(c),
        Action::Newline => self.newline(),
        Action::DeleteChar => self.delete_char(),
        Action::Commit => self.commit_edit(),
        Action::Back => self.cancel_edit(),
        _ => {}
      }
      return;
    }

    match action {
      Action::Quit => self.should_quit = true,
      Action::NavigateUp => self.navigate_up(),
      Action::NavigateDown => self.navigate_down(),
      Action::NavigateLeft => self.navigate_left(),
      Action::NavigateRight => self.navigate_right(),
      Action::Select => self.select(),
      Action::Back => self.back(),
      Action::NextPanel => self.focus = self.focus.next(),
      Action::PrevPanel => self.focus = self.focus.prev(),
      Action::GoToTop => self.go_to_top(),
      Action::GoToBottom => self.go_to_bottom(),
      Action::ToggleHelp => self.show_help = !self.show_help,
      Action::CycleTemplate => self.cycle_template(),
      Action::CycleColorScheme => self.cycle_color_scheme(),
      Action::AddTable | Action::AddChart | Action::AddCode => self.add_feature(&action),
      Action::RemoveFeature => self.remove_feature(),
      Action::Grow => self.resize_feature(1, 0),
      Action::Shrink => self.resize_feature(-1, 0),
      Action::GrowColumns => self.resize_feature(0, 1),
      Action::ShrinkColumns => self.resize_feature(0, -1),
      Action::CycleVariant => self.cycle_variant(),
      Action::Submit => self.submit(),
      Action::Input(_) | Action::Newline | Action::DeleteChar | Action::Commit | Action::None => {}
    }
  }

  fn navigate_up(&mut self) {
    match self.focus {
      Pane::Details => self.details.select_prev(),
      Pane::Sections => {
        self.sections.select_prev();
        self.features.reset();
      }
      Pane::Features => self.features.prev_field(),
    }
  }

  fn navigate_down(&mut self) {
    match self.focus {
      Pane::Details => self.details.select_next(),
      Pane::Sections => {
        self.sections.select_next(self.form.sections().len());
        self.features.reset();
      }
      Pane::Features => {
        let count = self.selected_feature().map(|f| fields(f).len()).unwrap_or(0);
        self.features.next_field(count);
      }
    }
  }

  fn navigate_left(&mut self) {
    if self.focus == Pane::Features {
      self.features.select_prev();
    }
  }

  fn navigate_right(&mut self) {
    if self.focus == Pane::Features {
      let count = self
        .form
        .sections()
        .get(self.sections.selected)
        .map(|s| s.features.len())
        .unwrap_or(0);
      self.features.select_next(count);
    }
  }

  fn go_to_top(&mut self) {
    match self.focus {
      Pane::Details => self.details.selected = 0,
      Pane::Sections => {
        self.sections.selected = 0;
        self.features.reset();
      }
      Pane::Features => self.features.field = 0,
    }
  }

  fn go_to_bottom(&mut self) {
    match self.focus {
      Pane::Details => self.details.select_last(),
      Pane::Sections => {
        self.sections.select_last(self.form.sections().len());
        self.features.reset();
      }
      Pane::Features => {
        let count = self.selected_feature().map(|f| fields(f).len()).unwrap_or(0);
        self.features.field = count.saturating_sub(1);
      }
    }
  }

  fn back(&mut self) {
    if self.show_help {
      self.show_help = false;
    } else {
      self.status = None;
    }
  }

  /// Enter starts an edit, or cycles the template/color rows in place
  fn select(&mut self) {
    let edit = match self.focus {
      Pane::Details => match self.details.row() {
        DetailRow::User(i) => {
          let (key, label) = USER_FIELDS[i];
          Some(Edit {
            target: EditTarget::UserField(key),
            label: label.to_string(),
            buffer: self.form.user.field(key).unwrap_or_default().to_string(),
          })
        }
        DetailRow::Template => {
          self.cycle_template();
          None
        }
        DetailRow::ColorScheme => {
          self.cycle_color_scheme();
          None
        }
      },
      Pane::Sections => self.form.sections().get(self.sections.selected).map(|s| Edit {
        target: EditTarget::Content(s.name.clone()),
        label: s.display_name(),
        buffer: s.content.clone(),
      }),
      Pane::Features => {
        let section = self.form.sections().get(self.sections.selected);
        self.features.current(section).map(|(feature, field)| Edit {
          target: EditTarget::Feature(feature.id(), field),
          label: field_label(feature, field),
          buffer: field_value(feature, field),
        })
      }
    };

    if let Some(edit) = edit {
      debug!(field = %edit.label, "Editing");
      self.edit = Some(edit);
      self.input_mode = InputMode::Editing;
    }
  }

  fn input_char(&mut self, c: char) {
    if let Some(edit) = &mut self.edit {
      edit.buffer.push(c);
    }
  }

  fn newline(&mut self) {
    if let Some(edit) = &mut self.edit
      && edit.target.multiline()
    {
      edit.buffer.push('\n');
    }
  }

  fn delete_char(&mut self) {
    if let Some(edit) = &mut self.edit {
      edit.buffer.pop();
    }
  }

  fn cancel_edit(&mut self) {
    self.edit = None;
    self.input_mode = InputMode::Normal;
  }

  fn commit_edit(&mut self) {
    self.input_mode = InputMode::Normal;
    let Some(edit) = self.edit.take() else {
      return;
    };

    let result = match &edit.target {
      EditTarget::UserField(key) => match self.form.user.field_mut(key) {
        Some(slot) => {
          *slot = edit.buffer;
          Ok(())
        }
        None => Ok(()),
      },
      EditTarget::Content(section) => self.form.set_content(section, edit.buffer),
      EditTarget::Feature(id, field) => self.write_feature_field(*id, *field, edit.buffer),
    };

    if let Err(e) = result {
      warn!("Could not store {}: {}", edit.label, e);
      self.set_status(format!("Could not store {}: {}", edit.label, e));
    }
  }

  fn write_feature_field(&mut self, id: FeatureId, field: FeatureField, value: String) -> dazzlo_core::Result<()> {
    match field {
      FeatureField::Title => match self.form.feature_mut(id) {
        Some(Feature::Table(table)) => table.set_title(value),
        Some(Feature::Chart(chart)) => chart.set_title(value),
        _ => return Err(dazzlo_core::Error::FeatureNotFound(id.to_string())),
      },
      FeatureField::Header(c) => self.form.table_mut(id)?.set_header(c, value)?,
      FeatureField::Cell(r, c) => self.form.table_mut(id)?.set_cell(r, c, value)?,
      FeatureField::Label(i) => self.form.chart_mut(id)?.set_label(i, value)?,
      FeatureField::Value(i) => self.form.chart_mut(id)?.set_value(i, value)?,
      FeatureField::Code => self.form.code_mut(id)?.code = value,
    }
    Ok(())
  }

  fn cycle_template(&mut self) {
    let Some(next) = self.form.registry().next_id(self.form.template_id()).map(str::to_string) else {
      self.set_status("No templates available");
      return;
    };
    let dropped: usize = self.form.sections().iter().map(|s| s.features.len()).sum();
    self.form.render(&next);
    self.sections.selected = 0;
    self.features.reset();

    let name = self
      .form
      .registry()
      .get(&next)
      .map(|t| t.name.clone())
      .unwrap_or_else(|| next.clone());
    info!(template = %next, dropped, "Template selected");
    if dropped > 0 {
      self.set_status(format!("Template: {} ({} features discarded)", name, dropped));
    } else {
      self.set_status(format!("Template: {}", name));
    }
  }

  fn cycle_color_scheme(&mut self) {
    self.form.color_scheme = ColorScheme::next_name(&self.form.color_scheme).to_string();
    self.set_status(format!("Color scheme: {}", self.form.color_scheme));
  }

  fn add_feature(&mut self, action: &Action) {
    let Some(section) = self.selected_section_name() else {
      self.set_status("Choose a template first (T)");
      return;
    };
    let added = match action {
      Action::AddTable => self.form.add_table(&section),
      Action::AddChart => self.form.add_chart(&section),
      _ => self.form.add_code(&section),
    };
    if let Some(id) = added {
      let count = self.form.section(&section).map(|s| s.features.len()).unwrap_or(0);
      self.features.selected = count.saturating_sub(1);
      self.features.field = 0;
      self.focus = Pane::Features;
      self.set_status(format!("Added {} to {}", id.kind(), dazzlo_core::display_name(&section)));
    }
  }

  fn remove_feature(&mut self) {
    if self.focus != Pane::Features {
      return;
    }
    let Some(id) = self.selected_feature().map(Feature::id) else {
      return;
    };
    if self.form.remove(id) {
      self.set_status(format!("Removed {}", id.kind()));
    }
    self.clamp_features();
  }

  /// Step the selected feature's size. Resizing regenerates a blank grid.
  fn resize_feature(&mut self, row_step: isize, column_step: isize) {
    if self.focus != Pane::Features {
      return;
    }
    let Some(feature) = self.selected_feature() else {
      return;
    };
    let id = feature.id();
    let result = match feature {
      Feature::Table(table) => {
        let rows = table.row_count().saturating_add_signed(row_step);
        let columns = table.column_count().saturating_add_signed(column_step);
        self.form.resize_table(id, rows, columns)
      }
      Feature::Chart(chart) if column_step == 0 => {
        let points = chart.point_count().saturating_add_signed(row_step);
        self.form.resize_chart(id, points)
      }
      _ => return,
    };
    if let Err(e) = result {
      warn!("Resize failed: {}", e);
    }
    self.clamp_features();

    let size = match self.form.feature(id) {
      Some(Feature::Table(t)) => format!("{}x{}", t.row_count(), t.column_count()),
      Some(Feature::Chart(c)) => format!("{} points", c.point_count()),
      _ => String::new(),
    };
    self.set_status(format!("Resized to {} (entries cleared)", size));
  }

  fn cycle_variant(&mut self) {
    if self.focus != Pane::Features {
      return;
    }
    let Some(id) = self.selected_feature().map(Feature::id) else {
      return;
    };
    match self.form.feature_mut(id) {
      Some(Feature::Chart(chart)) => {
        let next = chart.chart_type().next();
        chart.set_chart_type(next);
        self.status = Some(format!("Chart type: {}", next.label()));
      }
      Some(Feature::Code(code)) => {
        code.language = code.language.next();
        self.status = Some(format!("Language: {}", code.language.label()));
      }
      _ => {}
    }
  }

  /// Start a background submit; the result arrives on `submit_rx`
  fn submit(&mut self) {
    if self.orchestrator.is_submitting() {
      self.set_status("A document is already being generated");
      return;
    }

    let orchestrator = Arc::clone(&self.orchestrator);
    let form = self.form.clone();
    let dir = self.output_dir.clone();
    let tx = self.submit_tx.clone();
    tokio::spawn(async move {
      let result = orchestrator.submit_and_save(&form, &dir).await;
      if tx.send(result).is_err() {
        debug!("Editor closed before generation finished");
      }
    });
    self.set_status("Generating document...");
  }

  pub fn finish_submit(&mut self, result: SubmitResult) {
    match result {
      Ok(path) => self.set_status(format!("Saved to {}", path.display())),
      Err(SubmitError::AlreadySubmitting) => self.set_status("A document is already being generated"),
      Err(e) => {
        self.status = None;
        self.alert = Some(Alert {
          title: "Error".to_string(),
          message: e.user_message(),
        });
      }
    }
  }
}

/// Run the TUI application
pub async fn run(form: Form, orchestrator: Arc<SubmitOrchestrator>, output_dir: PathBuf) -> Result<()> {
  // Setup terminal
  enable_raw_mode()?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend)?;

  let mut app = App::new(form, orchestrator, output_dir);
  let mut events = EventStream::new();

  loop {
    terminal.draw(|f| {
      render_app(&app, f.area(), f.buffer_mut());
    })?;

    tokio::select! {
        Some(result) = app.submit_rx.recv() => {
            app.finish_submit(result);
        }
        event = events.next() => {
            match event {
                Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    let action = key_to_action(key, app.input_mode == InputMode::Editing);
                    app.handle_action(action);
                }
                Some(Ok(_)) => {
                    // Resize and friends redraw on the next loop
                }
                Some(Err(e)) => {
                    warn!("Terminal event error: {}", e);
                }
                None => break,
            }
        }
    }

    if app.should_quit {
      break;
    }
  }

  disable_raw_mode()?;
  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  Ok(())
}

/// Render the application
fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
  // Clear with background
  Clear.render(area, buf);
  for y in area.y..area.y + area.height {
    for x in area.x..area.x + area.width {
      buf[(x, y)].set_bg(Theme::BG);
    }
  }

  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(2), // Header
      Constraint::Min(10),   // Panes
      Constraint::Length(2), // Status + keybindings
    ])
    .split(area);

  render_header(app, chunks[0], buf);

  let columns = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
    .split(chunks[1]);
  let left = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(DETAIL_ROW_COUNT as u16 + 2), Constraint::Min(6)])
    .split(columns[0]);

  DetailsView::new(&app.form, &app.details, app.focus == Pane::Details).render(left[0], buf);
  SectionsView::new(&app.form, &app.sections, app.focus == Pane::Sections).render(left[1], buf);
  let section = app.form.sections().get(app.sections.selected);
  FeaturesView::new(section, &app.features, app.focus == Pane::Features).render(columns[1], buf);

  render_footer(app, chunks[2], buf);

  if app.show_help {
    render_help_overlay(area, buf);
  }
  if let Some(alert) = &app.alert {
    render_alert(alert, area, buf);
  }
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
  if area.height == 0 {
    return;
  }
  let title = "DazzloDocs";
  buf.set_string(area.x + 1, area.y, title, Style::default().fg(Theme::ACCENT).bold());

  let template = app
    .form
    .template_id()
    .and_then(|id| app.form.registry().get(id))
    .map(|t| t.name.as_str())
    .unwrap_or("No template");
  let mut x = area.x + title.len() as u16 + 3;
  buf.set_string(x, area.y, template, Style::default().fg(Theme::TEXT));
  x += template.len() as u16 + 2;
  let scheme = format!("● {}", app.form.color_scheme);
  buf.set_string(
    x,
    area.y,
    &scheme,
    Style::default().fg(Theme::scheme_accent(&app.form.color_scheme)),
  );
  x += scheme.chars().count() as u16 + 1;
  let swatch_width = (area.x + area.width).saturating_sub(x).min(12);
  PaletteSwatch::new(&app.form.color_scheme)
    .block_width(2)
    .render(Rect::new(x, area.y, swatch_width, 1), buf);

  // Submit control
  let control = app.orchestrator.control();
  let (marker, color) = if control.enabled {
    ("●", Theme::SUCCESS)
  } else {
    ("◌", Theme::WARNING)
  };
  let label = format!("{} {}", marker, control.label);
  let label_x = area.x + area.width.saturating_sub(label.chars().count() as u16 + 2);
  buf.set_string(label_x, area.y, &label, Style::default().fg(color));

  // Separator
  if area.height >= 2 {
    for x in area.x..area.x + area.width {
      buf[(x, area.y + 1)].set_char('─').set_fg(Theme::OVERLAY);
    }
  }
}

fn render_footer(app: &App, area: Rect, buf: &mut Buffer) {
  if area.height == 0 {
    return;
  }
  let width = area.width.saturating_sub(2) as usize;

  match &app.edit {
    Some(edit) => {
      let prompt = format!("{}: ", edit.label);
      let shown = format!("{}{}_", prompt, edit.buffer.replace('\n', "⏎"));
      // Keep the cursor end visible
      let skip = shown.chars().count().saturating_sub(width);
      let visible: String = shown.chars().skip(skip).collect();
      buf.set_string(area.x + 1, area.y, visible, Style::default().fg(Theme::ACCENT));
    }
    None => {
      if let Some(status) = &app.status {
        buf.set_string(area.x + 1, area.y, truncate(status, width), Style::default().fg(Theme::INFO));
      }
    }
  }

  if area.height < 2 {
    return;
  }
  let keybindings = match (app.input_mode, app.focus) {
    (InputMode::Editing, _) => "Enter:Save  Alt+Enter:Newline  Esc:Cancel",
    (InputMode::Normal, Pane::Features) => {
      "q:Quit  Tab:Pane  j/k:Field  h/l:Feature  Enter:Edit  +/-:Size  [/]:Cols  y:Type  x:Remove  ^S:Generate"
    }
    (InputMode::Normal, _) => "q:Quit  Tab:Pane  j/k:Nav  Enter:Edit  T:Template  C:Colors  t/c/o:Add  ^S:Generate  ?:Help",
  };
  buf.set_string(
    area.x + 1,
    area.y + 1,
    truncate(keybindings, width),
    Style::default().fg(Theme::MUTED),
  );
}

fn render_help_overlay(area: Rect, buf: &mut Buffer) {
  // Center the help box
  let help_width = 55;
  let help_height = 28;
  let x = area.x + (area.width.saturating_sub(help_width)) / 2;
  let y = area.y + (area.height.saturating_sub(help_height)) / 2;

  let help_area = Rect::new(x, y, help_width.min(area.width), help_height.min(area.height));

  for hy in help_area.y..help_area.y + help_area.height {
    for hx in help_area.x..help_area.x + help_area.width {
      buf[(hx, hy)].set_bg(Theme::SURFACE).set_char(' ');
    }
  }

  let block = Block::default()
    .title("Help")
    .title_style(Style::default().fg(Theme::ACCENT).bold())
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Theme::ACCENT));
  let inner = block.inner(help_area);
  block.render(help_area, buf);

  let help_text = [
    "NAVIGATION",
    "  Tab      Next pane",
    "  j/k      Move up/down (fields in features)",
    "  h/l      Previous/next feature",
    "  g/G      First/last entry",
    "  Enter    Edit field, cycle template or colors",
    "  Esc      Cancel edit, close help",
    "",
    "DOCUMENT",
    "  T        Next template (clears sections)",
    "  C        Next color scheme",
    "  Ctrl-S   Generate document",
    "",
    "FEATURES",
    "  t        Add table to section",
    "  c        Add chart to section",
    "  o        Add code block to section",
    "  x        Remove feature",
    "  +/-      More/fewer rows or points",
    "  ]/[      More/fewer table columns",
    "  y        Next chart type or language",
    "",
    "  q        Quit",
    "  ?        Toggle help",
  ];

  for (i, line) in help_text.iter().enumerate() {
    if i as u16 >= inner.height {
      break;
    }
    let style = if line.starts_with(|c: char| c.is_uppercase()) {
      Style::default().fg(Theme::ACCENT).bold()
    } else {
      Style::default().fg(Theme::TEXT)
    };
    buf.set_string(inner.x, inner.y + i as u16, line, style);
  }
}

fn render_alert(alert: &Alert, area: Rect, buf: &mut Buffer) {
  let width = 50.min(area.width);
  let lines = wrap(&alert.message, width.saturating_sub(4) as usize);
  let height = (lines.len() as u16 + 4).min(area.height);
  let x = area.x + (area.width.saturating_sub(width)) / 2;
  let y = area.y + (area.height.saturating_sub(height)) / 2;
  let alert_area = Rect::new(x, y, width, height);

  for ay in alert_area.y..alert_area.y + alert_area.height {
    for ax in alert_area.x..alert_area.x + alert_area.width {
      buf[(ax, ay)].set_bg(Theme::SURFACE).set_char(' ');
    }
  }

  let block = Block::default()
    .title(alert.title.as_str())
    .title_style(Style::default().fg(Theme::ERROR).bold())
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Theme::ERROR));
  let inner = block.inner(alert_area);
  block.render(alert_area, buf);

  for (i, line) in lines.iter().enumerate().take(inner.height as usize) {
    buf.set_string(inner.x + 1, inner.y + i as u16, line, Style::default().fg(Theme::TEXT));
  }
  if inner.height > 0 {
    buf.set_string(
      inner.x + 1,
      inner.y + inner.height - 1,
      "Enter: dismiss",
      Style::default().fg(Theme::MUTED),
    );
  }
}
