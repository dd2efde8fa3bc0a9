//! Cast Table
//!
//! The cast table is the bipartite view of the input: every actor, every
//! movie, and which actors appeared in which movie. It owns the interning of
//! actor names into dense [`ActorId`]s and of movies into [`MovieId`]s.
//!
//! Both the static actor graph and the temporal connectivity driver are fed
//! from a cast table, so this is the single place where input order turns
//! into id order.

use std::collections::BTreeMap;

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;

use super::node::{ActorId, Movie, MovieId, Year};

/// Most casts in the movie dataset are small, so they stay inline.
pub type Cast = SmallVec<[ActorId; 8]>;

/// Actors, movies and the actor lists of every movie.
#[derive(Debug, Clone, Default)]
pub struct CastTable {
    /// Actor names; the position of a name is its id.
    actors: IndexSet<String>,

    /// Movies in first-seen order, each with its cast in first-seen order.
    movies: IndexMap<Movie, Cast>,

    /// Most recent movie year seen so far.
    latest_year: Option<Year>,
}

impl CastTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern an actor name. Adding a known name returns its existing id.
    pub fn add_actor(&mut self, name: &str) -> ActorId {
        if let Some(index) = self.actors.get_index_of(name) {
            return ActorId::new(index);
        }
        let (index, _) = self.actors.insert_full(name.to_string());
        ActorId::new(index)
    }

    /// Record that `actor` appeared in `movie`.
    ///
    /// Listing the same actor twice for one movie records a single role.
    pub fn add_role(&mut self, actor: &str, movie: Movie) -> (ActorId, MovieId) {
        let actor_id = self.add_actor(actor);
        let year = movie.year;
        let entry = self.movies.entry(movie);
        let movie_id = MovieId::new(entry.index());
        let cast = entry.or_default();
        if !cast.contains(&actor_id) {
            cast.push(actor_id);
        }
        self.latest_year = Some(self.latest_year.map_or(year, |latest| latest.max(year)));
        (actor_id, movie_id)
    }

    /// Look up an actor by name.
    pub fn lookup(&self, name: &str) -> Option<ActorId> {
        self.actors.get_index_of(name).map(ActorId::new)
    }

    /// Name of an actor, if the id is known.
    pub fn name(&self, id: ActorId) -> Option<&str> {
        self.actors.get_index(id.index()).map(String::as_str)
    }

    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get_index(id.index()).map(|(movie, _)| movie)
    }

    /// Actors who appeared in a movie. Unknown movies have an empty cast.
    pub fn cast(&self, id: MovieId) -> &[ActorId] {
        self.movies
            .get_index(id.index())
            .map(|(_, cast)| cast.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn movie_entry(&self, id: MovieId) -> Option<(&Movie, &[ActorId])> {
        self.movies
            .get_index(id.index())
            .map(|(movie, cast)| (movie, cast.as_slice()))
    }

    /// Every movie with its cast, in first-seen order.
    pub fn movies(&self) -> impl Iterator<Item = (MovieId, &Movie, &[ActorId])> + '_ {
        self.movies
            .iter()
            .enumerate()
            .map(|(index, (movie, cast))| (MovieId::new(index), movie, cast.as_slice()))
    }

    /// Movies grouped by release year, years ascending.
    ///
    /// Within a year movies keep their first-seen order.
    pub fn movies_by_year(&self) -> BTreeMap<Year, Vec<MovieId>> {
        let mut batches: BTreeMap<Year, Vec<MovieId>> = BTreeMap::new();
        for (id, movie, _) in self.movies() {
            batches.entry(movie.year).or_default().push(id);
        }
        batches
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Most recent release year in the table, `None` when empty.
    pub fn latest_year(&self) -> Option<Year> {
        self.latest_year
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
