//! Estado de la galería de proyectos: filtro por categoría y lightbox
//! con paginación circular sobre las 4 vistas de cada proyecto.
//!
//! Las transiciones son funciones puras: reciben el estado actual y
//! devuelven el siguiente. El componente de la página es el dueño del
//! valor y decide cuándo re-renderizar.

use crate::catalog::{Project, IMAGES_PER_PROJECT};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    Fachada,
    AreaSocial,
    ProyectoCompleto,
    Renders3d,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Fachada,
        Category::AreaSocial,
        Category::ProyectoCompleto,
        Category::Renders3d,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Fachada => "Fachada",
            Category::AreaSocial => "Área social",
            Category::ProyectoCompleto => "Proyecto completo",
            Category::Renders3d => "Renders 3D",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Filter {
    #[default]
    Todos,
    Solo(Category),
}

impl Filter {
    pub fn label(self) -> &'static str {
        match self {
            Filter::Todos => "Todos",
            Filter::Solo(c) => c.label(),
        }
    }
}

/// `project` indexa la lista *filtrada* vigente, no el catálogo completo.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Lightbox {
    #[default]
    Cerrado,
    Abierto { project: usize, image: usize },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GalleryState {
    pub filter: Filter,
    pub lightbox: Lightbox,
}

impl GalleryState {
    /// Proyectos visibles bajo el filtro actual, en orden de catálogo.
    pub fn filtered<'a>(&self, catalog: &'a [Project]) -> Vec<&'a Project> {
        match self.filter {
            Filter::Todos => catalog.iter().collect(),
            Filter::Solo(c) => catalog.iter().filter(|p| p.category == c).collect(),
        }
    }

    /// Cambiar de filtro cierra siempre el lightbox: el índice de
    /// proyecto dejaría de corresponder a la lista filtrada anterior.
    pub fn set_filter(self, filter: Filter) -> Self {
        GalleryState {
            filter,
            lightbox: Lightbox::Cerrado,
        }
    }

    /// Precondición: `project` es un índice válido en la lista filtrada
    /// vigente. Todos los call sites se generan desde esa misma lista.
    pub fn open(self, project: usize, image: usize) -> Self {
        debug_assert!(image < IMAGES_PER_PROJECT);
        GalleryState {
            lightbox: Lightbox::Abierto { project, image },
            ..self
        }
    }

    pub fn close(self) -> Self {
        GalleryState {
            lightbox: Lightbox::Cerrado,
            ..self
        }
    }

    pub fn next_image(self) -> Self {
        self.step(1)
    }

    pub fn prev_image(self) -> Self {
        self.step(IMAGES_PER_PROJECT - 1)
    }

    fn step(self, delta: usize) -> Self {
        match self.lightbox {
            Lightbox::Cerrado => self,
            Lightbox::Abierto { project, image } => GalleryState {
                lightbox: Lightbox::Abierto {
                    project,
                    image: (image + delta) % IMAGES_PER_PROJECT,
                },
                ..self
            },
        }
    }

    /// Click en una miniatura dentro del lightbox abierto.
    pub fn jump_to_image(self, image: usize) -> Self {
        debug_assert!(image < IMAGES_PER_PROJECT);
        match self.lightbox {
            Lightbox::Cerrado => self,
            Lightbox::Abierto { project, .. } => GalleryState {
                lightbox: Lightbox::Abierto { project, image },
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PROJECTS;

    #[test]
    fn paging_wraps_backwards_from_zero() {
        let state = GalleryState::default().open(0, 0).prev_image();
        assert_eq!(
            state.lightbox,
            Lightbox::Abierto {
                project: 0,
                image: IMAGES_PER_PROJECT - 1
            }
        );
    }

    #[test]
    fn paging_wraps_forwards_from_last() {
        let state = GalleryState::default()
            .open(0, IMAGES_PER_PROJECT - 1)
            .next_image();
        assert_eq!(
            state.lightbox,
            Lightbox::Abierto {
                project: 0,
                image: 0
            }
        );
    }

    #[test]
    fn four_next_steps_return_to_start() {
        for start in 0..IMAGES_PER_PROJECT {
            let mut state = GalleryState::default().open(2, start);
            for _ in 0..IMAGES_PER_PROJECT {
                state = state.next_image();
            }
            assert_eq!(
                state.lightbox,
                Lightbox::Abierto {
                    project: 2,
                    image: start
                }
            );
        }
    }

    #[test]
    fn paging_is_noop_when_closed() {
        let state = GalleryState::default();
        assert_eq!(state.next_image(), state);
        assert_eq!(state.prev_image(), state);
        assert_eq!(state.jump_to_image(2), state);
    }

    #[test]
    fn filter_restricts_to_category_in_catalog_order() {
        for cat in Category::ALL {
            let state = GalleryState::default().set_filter(Filter::Solo(cat));
            let filtered = state.filtered(&PROJECTS);
            let expected: Vec<_> = PROJECTS.iter().filter(|p| p.category == cat).collect();
            assert_eq!(filtered, expected);
        }
    }

    #[test]
    fn filter_todos_keeps_full_catalog_order() {
        let state = GalleryState::default();
        let filtered = state.filtered(&PROJECTS);
        let ids: Vec<_> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn changing_filter_always_closes_lightbox() {
        let open = GalleryState::default().open(1, 3);
        for cat in Category::ALL {
            assert_eq!(
                open.set_filter(Filter::Solo(cat)).lightbox,
                Lightbox::Cerrado
            );
        }
        assert_eq!(open.set_filter(Filter::Todos).lightbox, Lightbox::Cerrado);
    }

    #[test]
    fn open_then_close_round_trip() {
        let state = GalleryState::default().open(3, 1);
        assert!(matches!(state.lightbox, Lightbox::Abierto { .. }));
        assert_eq!(state.close().lightbox, Lightbox::Cerrado);
        // el filtro no se toca al cerrar
        assert_eq!(state.close().filter, state.filter);
    }
}
