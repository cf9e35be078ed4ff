//! Composed per-element style state.
//!
//! Scroll bindings, the pinned track and the intro exit timeline all write
//! individual properties. The book folds them into one transform per element
//! and hands the web layer only what changed since the last drain.

use fnv::FnvHashMap;
use smallvec::SmallVec;

/// The n-th element matched by a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef {
    pub selector: &'static str,
    pub index: usize,
}

impl ElementRef {
    pub const fn new(selector: &'static str, index: usize) -> Self {
        Self { selector, index }
    }

    pub const fn first(selector: &'static str) -> Self {
        Self { selector, index: 0 }
    }
}

/// Animatable properties. Translations are in CSS px except `YPercent`/`XPercent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prop {
    X,
    Y,
    XPercent,
    YPercent,
    Scale,
    ScaleX,
    ScaleY,
    RotateX,
    RotateY,
    Opacity,
    /// Layout width in percent of the parent (loading bar fill).
    WidthPercent,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementStyle {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub x_percent: Option<f32>,
    pub y_percent: Option<f32>,
    pub scale: Option<f32>,
    pub scale_x: Option<f32>,
    pub scale_y: Option<f32>,
    pub rotate_x: Option<f32>,
    pub rotate_y: Option<f32>,
    pub opacity: Option<f32>,
    pub width_percent: Option<f32>,
    /// Explicit layout height in px; `None` leaves the stylesheet value.
    pub height_px: Option<f32>,
    pub classes: SmallVec<[(&'static str, bool); 2]>,
}

impl ElementStyle {
    fn set(&mut self, prop: Prop, value: f32) {
        let slot = match prop {
            Prop::X => &mut self.x,
            Prop::Y => &mut self.y,
            Prop::XPercent => &mut self.x_percent,
            Prop::YPercent => &mut self.y_percent,
            Prop::Scale => &mut self.scale,
            Prop::ScaleX => &mut self.scale_x,
            Prop::ScaleY => &mut self.scale_y,
            Prop::RotateX => &mut self.rotate_x,
            Prop::RotateY => &mut self.rotate_y,
            Prop::Opacity => &mut self.opacity,
            Prop::WidthPercent => &mut self.width_percent,
        };
        *slot = Some(value);
    }

    pub fn get(&self, prop: Prop) -> Option<f32> {
        match prop {
            Prop::X => self.x,
            Prop::Y => self.y,
            Prop::XPercent => self.x_percent,
            Prop::YPercent => self.y_percent,
            Prop::Scale => self.scale,
            Prop::ScaleX => self.scale_x,
            Prop::ScaleY => self.scale_y,
            Prop::RotateX => self.rotate_x,
            Prop::RotateY => self.rotate_y,
            Prop::Opacity => self.opacity,
            Prop::WidthPercent => self.width_percent,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|(c, on)| *c == class && *on)
    }

    /// CSS `transform` value. Returns `"none"` when no transform component is set.
    pub fn css_transform(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.x_percent.is_some() || self.y_percent.is_some() {
            parts.push(format!(
                "translate({}%, {}%)",
                fmt(self.x_percent.unwrap_or(0.0)),
                fmt(self.y_percent.unwrap_or(0.0))
            ));
        }
        if self.x.is_some() || self.y.is_some() {
            parts.push(format!(
                "translate3d({}px, {}px, 0px)",
                fmt(self.x.unwrap_or(0.0)),
                fmt(self.y.unwrap_or(0.0))
            ));
        }
        if let Some(r) = self.rotate_x {
            parts.push(format!("rotateX({}deg)", fmt(r)));
        }
        if let Some(r) = self.rotate_y {
            parts.push(format!("rotateY({}deg)", fmt(r)));
        }
        if let Some(s) = self.scale {
            parts.push(format!("scale({})", fmt(s)));
        }
        if let Some(s) = self.scale_x {
            parts.push(format!("scaleX({})", fmt(s)));
        }
        if let Some(s) = self.scale_y {
            parts.push(format!("scaleY({})", fmt(s)));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    pub fn has_transform(&self) -> bool {
        self.css_transform() != "none"
    }
}

fn fmt(v: f32) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        "0".to_string()
    } else {
        format!("{}", r)
    }
}

#[derive(Default)]
pub struct StyleBook {
    styles: FnvHashMap<ElementRef, ElementStyle>,
    dirty: Vec<ElementRef>,
}

impl StyleBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn mark(&mut self, el: ElementRef) {
        if !self.dirty.contains(&el) {
            self.dirty.push(el);
        }
    }

    pub fn set(&mut self, el: ElementRef, prop: Prop, value: f32) {
        let style = self.styles.entry(el).or_default();
        if style.get(prop) == Some(value) {
            return;
        }
        style.set(prop, value);
        self.mark(el);
    }

    pub fn set_height(&mut self, el: ElementRef, px: Option<f32>) {
        let style = self.styles.entry(el).or_default();
        if style.height_px == px {
            return;
        }
        style.height_px = px;
        self.mark(el);
    }

    pub fn set_class(&mut self, el: ElementRef, class: &'static str, on: bool) {
        let style = self.styles.entry(el).or_default();
        match style.classes.iter_mut().find(|(c, _)| *c == class) {
            Some((_, cur)) if *cur == on => return,
            Some((_, cur)) => *cur = on,
            None => style.classes.push((class, on)),
        }
        self.mark(el);
    }

    /// Drop every written property so the element falls back to its stylesheet.
    /// Class entries are kept but switched off so the web layer removes them.
    pub fn reset(&mut self, el: ElementRef) {
        let Some(style) = self.styles.get_mut(&el) else {
            return;
        };
        let classes: SmallVec<[(&'static str, bool); 2]> =
            style.classes.iter().map(|(c, _)| (*c, false)).collect();
        *style = ElementStyle {
            classes,
            ..ElementStyle::default()
        };
        self.mark(el);
    }

    pub fn get(&self, el: &ElementRef) -> Option<&ElementStyle> {
        self.styles.get(el)
    }

    pub fn drain_dirty(&mut self) -> Vec<(ElementRef, ElementStyle)> {
        let dirty = std::mem::take(&mut self.dirty);
        dirty
            .into_iter()
            .filter_map(|el| self.styles.get(&el).map(|s| (el, s.clone())))
            .collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.dirty.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: ElementRef = ElementRef::first(".hero");

    #[test]
    fn identical_writes_do_not_dirty() {
        let mut book = StyleBook::new();
        book.set(HERO, Prop::Y, 10.0);
        assert_eq!(book.drain_dirty().len(), 1);
        book.set(HERO, Prop::Y, 10.0);
        assert!(!book.has_pending());
    }

    #[test]
    fn transform_composes_in_fixed_order() {
        let mut book = StyleBook::new();
        book.set(HERO, Prop::Y, 12.5);
        book.set(HERO, Prop::YPercent, -100.0);
        book.set(HERO, Prop::ScaleY, 0.5);
        let css = book.get(&HERO).unwrap().css_transform();
        assert_eq!(
            css,
            "translate(0%, -100%) translate3d(0px, 12.5px, 0px) scaleY(0.5)"
        );
    }

    #[test]
    fn reset_clears_transform_and_switches_classes_off() {
        let mut book = StyleBook::new();
        book.set(HERO, Prop::X, -300.0);
        book.set_class(HERO, "active", true);
        book.drain_dirty();
        book.reset(HERO);
        let drained = book.drain_dirty();
        assert_eq!(drained.len(), 1);
        let style = &drained[0].1;
        assert_eq!(style.css_transform(), "none");
        assert!(!style.has_class("active"));
        assert_eq!(style.classes.len(), 1);
    }
}
