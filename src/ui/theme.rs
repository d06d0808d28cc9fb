//! Theme-specific style helpers for consistent styling across pages.
//!
//! Every visual decision funnels through one `Theme` value; pages and
//! components never pick colors on their own. Severity styles are fixed
//! across themes so a verdict reads the same in both palettes.

use crate::domain::{Severity, Theme};

// ============================================
// PAGE / CHROME STYLES
// ============================================

pub fn page_background(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "min-h-screen bg-[#0f1d2a] text-slate-100 font-sans",
        Theme::Light => "min-h-screen bg-[#F8F8F8] text-[#333333] font-sans",
    }
}

pub fn header_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "border-b border-[#475569]/40 bg-[#0f1d2a]/95 backdrop-blur px-6 py-4",
        Theme::Light => "border-b border-[#D1D5DB] bg-white/90 backdrop-blur px-6 py-4",
    }
}

pub fn title_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-xl font-semibold tracking-tight text-emerald-300",
        Theme::Light => "text-xl font-semibold tracking-tight text-[#6C5CE7]",
    }
}

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub fn panel(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-xl border border-[#475569]/60 bg-[#1E293B]/80",
        Theme::Light => "rounded-xl border border-[#D1D5DB] bg-white shadow-sm",
    }
}

pub fn panel_solid(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-xl border border-[#334155] bg-[#16243a]/70",
        Theme::Light => "rounded-xl border border-[#E5E7EB] bg-[#FAFAFA]",
    }
}

pub fn divider(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "divide-y divide-[#334155]/60",
        Theme::Light => "divide-y divide-[#F3F4F6]",
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "mt-1 w-full rounded-lg border border-[#475569] bg-[#334155] px-3 py-2.5 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
        Theme::Light => "mt-1 w-full rounded-lg border border-[#D1D5DB] bg-white px-3 py-2.5 text-sm text-[#333333] focus:border-[#6C5CE7] focus:outline-none",
    }
}

pub fn label_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "block text-xs font-semibold uppercase tracking-wide text-[#94A3B8]",
        Theme::Light => "block text-xs font-semibold uppercase tracking-wide text-[#6B7280]",
    }
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg bg-[#11ac5e] px-4 py-2.5 text-sm font-semibold text-white hover:bg-emerald-500",
        Theme::Light => "rounded-lg bg-[#6C5CE7] px-4 py-2.5 text-sm font-semibold text-white hover:bg-[#5a4bd4]",
    }
}

pub fn btn_disabled(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg bg-[#334155] px-4 py-2.5 text-sm font-semibold text-[#94A3B8] cursor-not-allowed",
        Theme::Light => "rounded-lg bg-[#D1D5DB] px-4 py-2.5 text-sm font-semibold text-white cursor-not-allowed",
    }
}

pub fn btn_secondary(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg border border-[#475569] px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-[#334155]",
        Theme::Light => "rounded-lg border border-[#D1D5DB] px-4 py-2 text-xs font-semibold uppercase tracking-wide text-[#333333] hover:bg-[#F3F4F6]",
    }
}

pub fn btn_choice_active(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "min-w-[6rem] rounded-lg px-3 py-1.5 text-sm font-semibold bg-emerald-500/20 text-emerald-300 border border-emerald-500/40",
        Theme::Light => "min-w-[6rem] rounded-lg px-3 py-1.5 text-sm font-semibold bg-[#6C5CE7]/10 text-[#6C5CE7] border border-[#6C5CE7]/40",
    }
}

pub fn btn_choice_inactive(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "min-w-[6rem] rounded-lg px-3 py-1.5 text-sm text-[#94A3B8] border border-[#475569] hover:border-emerald-600 hover:text-emerald-300 transition",
        Theme::Light => "min-w-[6rem] rounded-lg px-3 py-1.5 text-sm text-[#6B7280] border border-[#D1D5DB] hover:border-[#6C5CE7] hover:text-[#6C5CE7] transition",
    }
}

pub fn nav_active(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "min-w-[5.5rem] rounded-lg border border-emerald-500/60 bg-emerald-500/15 px-4 py-2 font-semibold text-emerald-300",
        Theme::Light => "min-w-[5.5rem] rounded-lg border border-[#6C5CE7]/60 bg-[#6C5CE7]/10 px-4 py-2 font-semibold text-[#6C5CE7]",
    }
}

pub fn nav_inactive(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-[#94A3B8] transition hover:border-[#475569] hover:text-slate-200",
        Theme::Light => "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-[#6B7280] transition hover:border-[#D1D5DB] hover:text-[#333333]",
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_primary(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-slate-100",
        Theme::Light => "text-[#333333]",
    }
}

pub fn text_secondary(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-slate-300",
        Theme::Light => "text-[#555555]",
    }
}

pub fn text_muted(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-[#94A3B8]",
        Theme::Light => "text-[#6B7280]",
    }
}

pub fn accent_text(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-emerald-400",
        Theme::Light => "text-[#6C5CE7]",
    }
}

// ============================================
// SEVERITY STYLES (theme-independent)
// ============================================

/// Card chrome for the verdict and any severity-colored panel.
pub fn severity_card(severity: Severity) -> &'static str {
    match severity {
        Severity::Excellent => "rounded-xl border border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        Severity::Good => "rounded-xl border border-teal-500/40 bg-teal-500/10 text-teal-200",
        Severity::Fair => "rounded-xl border border-sky-500/40 bg-sky-500/10 text-sky-200",
        Severity::Poor => "rounded-xl border border-amber-500/40 bg-amber-500/10 text-amber-200",
        Severity::Critical => "rounded-xl border border-rose-500/40 bg-rose-500/10 text-rose-200",
    }
}

/// Pill badge for indicator ratings.
pub fn severity_badge(severity: Severity) -> &'static str {
    match severity {
        Severity::Excellent => "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        Severity::Good => "bg-teal-500/10 text-teal-300 border-teal-500/40",
        Severity::Fair => "bg-sky-500/10 text-sky-300 border-sky-500/40",
        Severity::Poor => "bg-amber-500/10 text-amber-300 border-amber-500/40",
        Severity::Critical => "bg-rose-500/10 text-rose-300 border-rose-500/40",
    }
}

/// The "no market data for this neighborhood" card — a state, not a tier.
pub fn insufficient_data_card() -> &'static str {
    "rounded-xl border border-amber-500/40 bg-amber-500/10 text-amber-200"
}
