use uuid::Uuid;

/// Rendered diameter of a fresh ripple, before it scales up.
pub const RIPPLE_SIZE: f64 = 20.0;

/// An expanding circle centred on a click.
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub started_at: u64,
}

impl Ripple {
    pub fn new(x: f64, y: f64, started_at: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            started_at,
        }
    }

    /// Css `left` so the circle is centred on the click.
    pub fn left(&self) -> f64 {
        self.x - RIPPLE_SIZE / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y - RIPPLE_SIZE / 2.0
    }
}

/// Active ripples, each dropped once its lifetime has passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ripples {
    active: Vec<Ripple>,
    lifetime: u64,
}

impl Ripples {
    pub fn new(lifetime: u64) -> Self {
        Self {
            active: vec![],
            lifetime,
        }
    }

    pub fn spawn(&mut self, x: f64, y: f64, now: u64) -> Uuid {
        let ripple = Ripple::new(x, y, now);
        let id = ripple.id;
        self.active.push(ripple);
        id
    }

    /// Drops expired ripples, returning how many were removed.
    pub fn expire(&mut self, now: u64) -> usize {
        let before = self.active.len();
        let lifetime = self.lifetime;
        self.active
            .retain(|ripple| now < ripple.started_at.saturating_add(lifetime));
        before - self.active.len()
    }

    /// When the oldest ripple should go.
    pub fn next_expiry(&self) -> Option<u64> {
        self.active
            .iter()
            .map(|ripple| ripple.started_at.saturating_add(self.lifetime))
            .min()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.active.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_lifetime() {
        let mut ripples = Ripples::new(1000);
        ripples.spawn(100.0, 50.0, 10);
        ripples.spawn(5.0, 5.0, 500);
        assert_eq!(ripples.next_expiry(), Some(1010));

        assert_eq!(ripples.expire(1009), 0);
        assert_eq!(ripples.expire(1010), 1);
        assert_eq!(ripples.iter().count(), 1);
        assert_eq!(ripples.next_expiry(), Some(1500));

        assert_eq!(ripples.expire(1500), 1);
        assert_eq!(ripples.iter().count(), 0);
        assert_eq!(ripples.next_expiry(), None);
    }

    #[test]
    fn test_ripple_is_centred() {
        let ripple = Ripple::new(100.0, 40.0, 0);
        assert_eq!(ripple.left(), 90.0);
        assert_eq!(ripple.top(), 30.0);
    }
}
