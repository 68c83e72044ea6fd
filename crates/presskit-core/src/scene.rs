use crate::{Color, Rect, Transform};

/// Display list produced by a frame. Hosts walk `nodes` in order; clip and
/// transform pushes nest.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    /// Clip/transform pushes must be balanced once painting is done.
    pub fn is_balanced(&self) -> bool {
        let mut clips = 0i32;
        let mut transforms = 0i32;
        for n in &self.nodes {
            match n {
                SceneNode::PushClip { .. } => clips += 1,
                SceneNode::PopClip => clips -= 1,
                SceneNode::PushTransform { .. } => transforms += 1,
                SceneNode::PopTransform => transforms -= 1,
                _ => {}
            }
            if clips < 0 || transforms < 0 {
                return false;
            }
        }
        clips == 0 && transforms == 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
    },
    PushClip {
        rect: Rect,
        radius: f32,
    },
    PopClip,
    PushTransform {
        transform: Transform,
    },
    PopTransform,
}
