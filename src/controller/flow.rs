//! Submission flows and the messages they publish

use crate::gateway::GatewayError;

/// Remote operations a controller can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Login,
    Register,
    LoadBooks,
    CreateBook,
    UpdateBook,
    DeleteBook,
}

impl Flow {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::LoadBooks => "load-books",
            Self::CreateBook => "create-book",
            Self::UpdateBook => "update-book",
            Self::DeleteBook => "delete-book",
        }
    }

    /// Message published when the flow succeeds
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            Self::CreateBook => Some("Libro creado exitosamente"),
            Self::UpdateBook => Some("Libro actualizado exitosamente"),
            Self::DeleteBook => Some("Libro eliminado exitosamente"),
            Self::Login | Self::Register | Self::LoadBooks => None,
        }
    }

    /// General error message for a failed call
    ///
    /// Deterministic for a given error so it can be asserted on.
    pub fn failure_message(&self, err: &GatewayError) -> String {
        match (self, err) {
            (Self::Login, GatewayError::Status { code, .. }) if matches!(*code, 401 | 403 | 404) => {
                "Credenciales incorrectas. Verifica tu correo y contraseña.".to_string()
            }
            (Self::Login, GatewayError::Status { body, .. }) => body
                .clone()
                .unwrap_or_else(|| "Error desconocido en el login".to_string()),
            (Self::Register, GatewayError::Status { body, .. }) => body
                .clone()
                .unwrap_or_else(|| "Error desconocido en el registro".to_string()),
            (Self::Login, GatewayError::EmptyBody) => "Respuesta de login vacía".to_string(),
            (Self::Register, GatewayError::EmptyBody) => "Respuesta de registro vacía".to_string(),
            (Self::Login | Self::Register | Self::LoadBooks, GatewayError::Transport(msg)) => {
                format!("Error de conexión: {msg}")
            }
            (Self::LoadBooks, GatewayError::Status { code, .. }) => {
                format!("Error al cargar libros: {code}")
            }
            (Self::CreateBook, GatewayError::Status { code, .. }) => {
                format!("Error al crear libro: {code}")
            }
            (Self::UpdateBook, GatewayError::Status { code, .. }) => {
                format!("Error al actualizar libro: {code}")
            }
            (Self::DeleteBook, GatewayError::Status { code, .. }) => {
                format!("Error al eliminar libro: {code}")
            }
            (Self::LoadBooks, err) => format!("Error de conexión: {err}"),
            (_, err) => format!("Error: {err}"),
        }
    }
}
