// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! Canonical user-facing message strings.
//!
//! The server emits these verbatim in `{error}` / `{message}` responses and
//! the client's rejection matcher classifies on them, so they live in one
//! place. All strings are French, matching the product's locale.

/// Rejection: commercial name longer than 24 characters.
pub const NAME_TOO_LONG: &str = "Le nom d'une opération ne doit pas dépasser 24 caractères";

/// Rejection: available lot count below 1.
pub const LOTS_NOT_POSITIVE: &str = "Le nombre de lots doit être positif";

/// Rejection: the linked company does not exist.
pub const COMPANY_NOT_FOUND: &str = "La société rattachée n'existe pas";

/// Rejection: another operation carries the same name within the
/// ten-year delivery window.
pub const DUPLICATE_NAME: &str = "Une opération portant le même nom existe déjà";

/// Success message returned by the create endpoint.
pub const OPERATION_CREATED: &str = "Nouvelle opération enregistrée";

/// Drain outcome: the queue was empty.
pub const NOTHING_TO_SYNC: &str = "Aucune opération en attente.";

/// Drain refused: the client is offline.
pub const OFFLINE_CANNOT_SYNC: &str = "Hors ligne. Impossible de synchroniser.";

/// Drain refused: another drain pass is still running.
pub const SYNC_IN_PROGRESS: &str = "Synchronisation déjà en cours.";

/// Read-path notice: the cached snapshot is being shown.
pub const OFFLINE_SHOWING_CACHE: &str =
    "Vous êtes hors ligne. Affichage des données en cache.";

/// Read-path notice: the demonstration dataset is being shown.
pub const API_UNREACHABLE_SHOWING_DEMO: &str =
    "Impossible de charger les données depuis l'API. Affichage des données de démonstration.";

/// Drain summary when every pending item synced.
pub fn synced_ok(count: usize) -> String {
    format!("{count} opération(s) synchronisée(s) avec succès.")
}

/// Drain summary when at least one pending item failed.
pub fn sync_partial(synced: usize, failed: usize) -> String {
    format!(
        "{synced} synchronisée(s), {failed} échec(s). \
         Certaines opérations n'ont pas pu être synchronisées."
    )
}

#[cfg(test)]
#[path = "messages_tests.rs"]
mod tests;
