use freedraw::canvas::{CanvasHandle, CanvasProps, SketchCanvas};
use freedraw::draw::HexColor;
use freedraw::panel::{PanelOptions, ToolMode, ToolPanel};

/// Counts commands; stands in for a canvas that is mounted behind a `Box`.
#[derive(Default)]
struct CountingCanvas {
    erase_modes: Vec<bool>,
    undos: usize,
    redos: usize,
    clears: usize,
    props: Option<CanvasProps>,
}

impl CanvasHandle for CountingCanvas {
    fn erase_mode(&mut self, enabled: bool) {
        self.erase_modes.push(enabled);
    }

    fn undo(&mut self) {
        self.undos += 1;
    }

    fn redo(&mut self) {
        self.redos += 1;
    }

    fn clear_canvas(&mut self) {
        self.clears += 1;
    }

    fn apply_props(&mut self, props: &CanvasProps) {
        self.props = Some(props.clone());
    }
}

#[test]
fn boxed_handle_receives_commands() {
    let mut panel: ToolPanel<Box<CountingCanvas>> = ToolPanel::new(PanelOptions::default());
    panel.attach(Box::default());

    panel.activate_eraser();
    panel.undo();
    panel.undo();
    panel.redo();
    panel.clear();
    panel.activate_pen();

    let canvas = panel.handle().unwrap();
    // The first entry is the sync performed on attach.
    assert_eq!(canvas.erase_modes, vec![false, true, false]);
    assert_eq!((canvas.undos, canvas.redos, canvas.clears), (2, 1, 1));
}

#[test]
fn attach_pushes_current_props() {
    let mut panel: ToolPanel<CountingCanvas> = ToolPanel::new(PanelOptions::default());
    panel.set_stroke_color(HexColor::parse("#ff0000").unwrap());
    panel.set_stroke_opacity(50);
    panel.attach(CountingCanvas::default());

    let props = panel.handle().unwrap().props.clone().unwrap();
    assert_eq!(props.stroke_color.to_string(), "rgba(255, 0, 0, 0.5)");
    assert_eq!(props.stroke_width, 5);
    assert_eq!(props.eraser_width, 10);
    assert_eq!(props.canvas_color.as_str(), "#ffffff");
}

#[test]
fn sketch_canvas_end_to_end() {
    let mut panel: ToolPanel<SketchCanvas> = ToolPanel::new(PanelOptions::default());
    let sketch = SketchCanvas::new(panel.canvas_props());
    panel.attach(sketch);

    panel.set_stroke_width(8);
    let sketch = panel.handle_mut().unwrap();
    sketch.begin_stroke((0.0, 0.0));
    sketch.extend_stroke((10.0, 0.0));
    sketch.end_stroke();

    panel.activate_eraser();
    // Stroke color changes while erasing do not touch eraser strokes.
    panel.set_stroke_color(HexColor::parse("#00ff00").unwrap());
    let sketch = panel.handle_mut().unwrap();
    sketch.begin_stroke((5.0, 0.0));
    sketch.end_stroke();

    let strokes = panel.handle().unwrap().strokes();
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[0].width, 8.0);
    assert!(strokes[1].is_eraser());
    assert_eq!(strokes[1].width, 10.0);

    panel.undo();
    assert_eq!(panel.handle().unwrap().strokes().len(), 1);
    panel.clear();
    assert!(panel.handle().unwrap().strokes().is_empty());
    panel.undo();
    assert_eq!(panel.handle().unwrap().strokes().len(), 1);

    panel.activate_pen();
    assert_eq!(panel.mode(), ToolMode::Pen);
    assert_eq!(panel.state().stroke_width(), 8);
}

#[test]
fn detached_panel_keeps_working() {
    let mut panel: ToolPanel<SketchCanvas> = ToolPanel::new(PanelOptions::default());
    let sketch = SketchCanvas::new(panel.canvas_props());
    panel.attach(sketch);
    let sketch = panel.detach().unwrap();
    assert!(sketch.strokes().is_empty());

    panel.undo();
    panel.redo();
    panel.clear();
    panel.activate_eraser();
    assert_eq!(panel.mode(), ToolMode::Eraser);
}
