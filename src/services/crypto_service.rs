//! services/crypto_service.rs
//! Encriptación autenticada AES-256-GCM con openssl.
//!
//! Formato de salida: base64(iv || texto_cifrado || tag). La llave es el
//! SHA-256 del secreto configurado; el IV es aleatorio por cada llamada.
//! Cualquier byte alterado hace fallar la verificación del tag.

use std::fmt;

use anyhow::{Context, Result};
use openssl::{
    memcmp,
    rand::rand_bytes,
    sha::sha256,
    symm::{decrypt_aead, encrypt_aead, Cipher},
};

use crate::errors::CosteoError;

const IV_LEN: usize = 12;
const TAG_LEN: usize = 16;

#[derive(Clone)]
pub struct CryptoService {
    llave: [u8; 32],
}

impl fmt::Debug for CryptoService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoService").finish_non_exhaustive()
    }
}

impl CryptoService {
    pub fn new(secreto: &str) -> Self {
        CryptoService {
            llave: sha256(secreto.as_bytes()),
        }
    }

    pub fn encriptar(&self, texto: &str) -> Result<String> {
        let mut iv = [0u8; IV_LEN];
        rand_bytes(&mut iv).context("No se pudo generar IV")?;

        let mut tag = [0u8; TAG_LEN];
        let cifrado = encrypt_aead(
            Cipher::aes_256_gcm(),
            &self.llave,
            Some(&iv),
            &[],
            texto.as_bytes(),
            &mut tag,
        )
        .context("Fallo al encriptar")?;

        let mut salida = Vec::with_capacity(IV_LEN + cifrado.len() + TAG_LEN);
        salida.extend_from_slice(&iv);
        salida.extend_from_slice(&cifrado);
        salida.extend_from_slice(&tag);
        Ok(base64::encode(salida))
    }

    pub fn desencriptar(&self, encriptado: &str) -> Result<String> {
        let datos = base64::decode(encriptado.trim())
            .map_err(|_| CosteoError::validacion("Texto encriptado inválido"))?;
        if datos.len() <= IV_LEN + TAG_LEN {
            return Err(CosteoError::validacion("Texto encriptado inválido"));
        }

        let (iv, resto) = datos.split_at(IV_LEN);
        let (cifrado, tag) = resto.split_at(resto.len() - TAG_LEN);
        let claro = decrypt_aead(Cipher::aes_256_gcm(), &self.llave, Some(iv), &[], cifrado, tag)
            .map_err(|_| CosteoError::validacion("No se pudo desencriptar el texto"))?;

        String::from_utf8(claro)
            .map_err(|_| CosteoError::validacion("El texto desencriptado no es UTF-8"))
    }

    /// Comparación en tiempo constante
    pub fn iguales(a: &str, b: &str) -> bool {
        a.len() == b.len() && memcmp::eq(a.as_bytes(), b.as_bytes())
    }
}
