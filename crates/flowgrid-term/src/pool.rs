//! Recycling of per-cell sprite instances.

use std::collections::HashMap;

use flowgrid_core::{ContentPool, ContentType, Point};

fn slot(kind: ContentType) -> usize {
    match kind {
        ContentType::Empty => 0,
        ContentType::Destination => 1,
        ContentType::Wall => 2,
    }
}

/// Hands out sprite ids per content kind, reusing released ones.
#[derive(Debug, Default)]
pub struct SpritePool {
    free: [Vec<u32>; 3],
    live: HashMap<Point, (ContentType, u32)>,
    created: u32,
}

impl SpritePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sprites of `kind` currently placed on the board.
    pub fn live(&self, kind: ContentType) -> usize {
        self.live.values().filter(|(k, _)| *k == kind).count()
    }

    /// Sprites ever created. Stays flat once released ids cover demand.
    pub fn created(&self) -> u32 {
        self.created
    }

    #[cfg(test)]
    fn sprite_at(&self, at: Point) -> Option<u32> {
        self.live.get(&at).map(|&(_, id)| id)
    }
}

impl ContentPool for SpritePool {
    fn acquire(&mut self, kind: ContentType, at: Point) {
        let id = match self.free[slot(kind)].pop() {
            Some(id) => id,
            None => {
                self.created += 1;
                self.created
            }
        };
        if let Some((old, old_id)) = self.live.insert(at, (kind, id)) {
            log::warn!("sprite {old_id} ({old:?}) at {at} replaced without release");
        }
    }

    fn release(&mut self, kind: ContentType, at: Point) {
        match self.live.remove(&at) {
            Some((k, id)) if k == kind => self.free[slot(kind)].push(id),
            other => log::warn!("release of {kind:?} at {at} found {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_ids_are_reused_per_kind() {
        let mut pool = SpritePool::new();
        let p = Point::new(1, 1);
        pool.acquire(ContentType::Wall, p);
        let wall = pool.sprite_at(p);
        pool.release(ContentType::Wall, p);
        pool.acquire(ContentType::Empty, p);
        assert_ne!(pool.sprite_at(p), wall);
        pool.release(ContentType::Empty, p);
        pool.acquire(ContentType::Wall, p);
        assert_eq!(pool.sprite_at(p), wall);
        assert_eq!(pool.created(), 2);
        assert_eq!(pool.live(ContentType::Wall), 1);
        assert_eq!(pool.live(ContentType::Empty), 0);
    }
}
