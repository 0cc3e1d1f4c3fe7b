//! The fixed extent of the national catalog.
use crate::pokemon;

/// Highest valid catalog number.
pub const SIZE: u32 = 1025;

pub fn ids() -> impl DoubleEndedIterator<Item = pokemon::Id> {
    (1..=SIZE).map(pokemon::Id::new)
}

pub fn contains(id: pokemon::Id) -> bool {
    (1..=SIZE).contains(&id.number())
}

pub fn previous(id: pokemon::Id) -> Option<pokemon::Id> {
    if !contains(id) || id.number() == 1 {
        return None;
    }

    Some(pokemon::Id::new(id.number() - 1))
}

pub fn next(id: pokemon::Id) -> Option<pokemon::Id> {
    if !contains(id) || id.number() == SIZE {
        return None;
    }

    Some(pokemon::Id::new(id.number() + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pokemon::Id;

    #[test]
    fn bounds_have_a_single_neighbor() {
        assert_eq!(previous(Id::new(1)), None);
        assert_eq!(next(Id::new(1)), Some(Id::new(2)));

        assert_eq!(previous(Id::new(SIZE)), Some(Id::new(SIZE - 1)));
        assert_eq!(next(Id::new(SIZE)), None);
    }

    #[test]
    fn ids_outside_the_catalog_have_no_neighbors() {
        assert_eq!(previous(Id::new(10001)), None);
        assert_eq!(next(Id::new(10001)), None);
        assert_eq!(next(Id::new(0)), None);
    }

    #[test]
    fn ids_cover_the_whole_catalog() {
        assert_eq!(ids().count(), SIZE as usize);
        assert_eq!(ids().next(), Some(Id::new(1)));
        assert_eq!(ids().next_back(), Some(Id::new(SIZE)));
    }
}
