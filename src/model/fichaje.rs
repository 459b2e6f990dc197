use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;

/// Kind of clock event. The wire tokens are the canonical Spanish ones and
/// the match is case-sensitive: anything but "ENTRADA"/"SALIDA" is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoFichaje {
    #[serde(rename = "ENTRADA")]
    Entrada,
    #[serde(rename = "SALIDA")]
    Salida,
}

impl TipoFichaje {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoFichaje::Entrada => "ENTRADA",
            TipoFichaje::Salida => "SALIDA",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ENTRADA" => Some(TipoFichaje::Entrada),
            "SALIDA" => Some(TipoFichaje::Salida),
            _ => None,
        }
    }
}

/// One persisted clock event, as read back from the `fichajes` table.
/// `tipo` stays a plain string on the read side: the enum is enforced on
/// the write path only, and rows are returned as stored.
#[derive(Debug, Serialize, FromRow)]
pub struct Fichaje {
    pub id: i32,
    pub empleado_id: String,
    pub tipo: String,
    pub actividad: Option<String>,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    pub created_at: NaiveDateTime,
}

/// Inbound registration payload. Every field is optional so that missing
/// required fields are reported by validation, not by deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct NuevoFichaje {
    pub empleado_id: Option<String>,
    pub tipo_fichaje: Option<String>,
    pub actividad: Option<String>,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
}

/// A payload that passed validation and is ready to persist.
#[derive(Debug)]
pub struct FichajeValido {
    pub empleado_id: String,
    pub tipo: TipoFichaje,
    pub actividad: Option<String>,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
}

impl NuevoFichaje {
    /// Pure validation, fail fast on the first violation:
    /// required fields present and non-empty, then tipo in the enumeration.
    pub fn validar(self) -> Result<FichajeValido, ApiError> {
        let empleado_id = self.empleado_id.filter(|v| !v.is_empty());
        let tipo = self.tipo_fichaje.filter(|v| !v.is_empty());

        let (Some(empleado_id), Some(tipo)) = (empleado_id, tipo) else {
            return Err(ApiError::Validation(
                "empleado_id y tipo_fichaje son requeridos".to_string(),
            ));
        };

        let tipo = TipoFichaje::parse(&tipo).ok_or_else(|| {
            ApiError::Validation("tipo_fichaje debe ser ENTRADA o SALIDA".to_string())
        })?;

        Ok(FichajeValido {
            empleado_id,
            tipo,
            actividad: self.actividad,
            latitud: self.latitud,
            longitud: self.longitud,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(empleado_id: Option<&str>, tipo: Option<&str>) -> NuevoFichaje {
        NuevoFichaje {
            empleado_id: empleado_id.map(str::to_string),
            tipo_fichaje: tipo.map(str::to_string),
            ..NuevoFichaje::default()
        }
    }

    fn validation_message(err: ApiError) -> String {
        match err {
            ApiError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn acepta_entrada_y_salida() {
        let entrada = payload(Some("E1"), Some("ENTRADA")).validar().unwrap();
        assert_eq!(entrada.tipo, TipoFichaje::Entrada);
        assert_eq!(entrada.empleado_id, "E1");

        let salida = payload(Some("E1"), Some("SALIDA")).validar().unwrap();
        assert_eq!(salida.tipo, TipoFichaje::Salida);
    }

    #[test]
    fn conserva_los_campos_opcionales() {
        let valido = NuevoFichaje {
            empleado_id: Some("E7".to_string()),
            tipo_fichaje: Some("ENTRADA".to_string()),
            actividad: Some("reunión".to_string()),
            latitud: Some(40.4168),
            longitud: Some(-3.7038),
        }
        .validar()
        .unwrap();

        assert_eq!(valido.actividad.as_deref(), Some("reunión"));
        assert_eq!(valido.latitud, Some(40.4168));
        assert_eq!(valido.longitud, Some(-3.7038));
    }

    #[test]
    fn opcionales_ausentes_quedan_ausentes() {
        let valido = payload(Some("E1"), Some("SALIDA")).validar().unwrap();
        assert!(valido.actividad.is_none());
        assert!(valido.latitud.is_none());
        assert!(valido.longitud.is_none());
    }

    #[test]
    fn rechaza_empleado_id_ausente_o_vacio() {
        for nuevo in [payload(None, Some("ENTRADA")), payload(Some(""), Some("ENTRADA"))] {
            let msg = validation_message(nuevo.validar().unwrap_err());
            assert_eq!(msg, "empleado_id y tipo_fichaje son requeridos");
        }
    }

    #[test]
    fn rechaza_tipo_ausente_o_vacio() {
        for nuevo in [payload(Some("E1"), None), payload(Some("E1"), Some(""))] {
            let msg = validation_message(nuevo.validar().unwrap_err());
            assert_eq!(msg, "empleado_id y tipo_fichaje son requeridos");
        }
    }

    #[test]
    fn rechaza_tipo_fuera_de_la_enumeracion() {
        for tipo in ["INVALIDO", "entrada", "Salida", " ENTRADA", "ENTRADA "] {
            let msg = validation_message(payload(Some("E1"), Some(tipo)).validar().unwrap_err());
            assert_eq!(msg, "tipo_fichaje debe ser ENTRADA o SALIDA");
        }
    }

    #[test]
    fn parse_es_exacto() {
        assert_eq!(TipoFichaje::parse("ENTRADA"), Some(TipoFichaje::Entrada));
        assert_eq!(TipoFichaje::parse("SALIDA"), Some(TipoFichaje::Salida));
        assert_eq!(TipoFichaje::parse("salida"), None);
        assert_eq!(TipoFichaje::parse(""), None);
    }
}
